//! Store for the dashboard feature.

use crate::dashboard::actions::DashboardAction;
use crate::dashboard::environment::ProductionDashboardEnvironment;
use crate::dashboard::reducer::DashboardReducer;
use crate::dashboard::types::DashboardState;
use encore_runtime::{EffectHandle, Store, StoreError};
use tokio::sync::broadcast;

/// Store managing the admin statistics card.
pub struct DashboardStore {
    inner: Store<DashboardState, DashboardAction, ProductionDashboardEnvironment, DashboardReducer>,
}

impl DashboardStore {
    /// Create a new dashboard store.
    #[must_use]
    pub fn new(environment: ProductionDashboardEnvironment) -> Self {
        Self {
            inner: Store::new(
                DashboardState::default(),
                DashboardReducer::new(),
                environment,
            ),
        }
    }

    /// Dispatch an action.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn send(&self, action: DashboardAction) -> Result<EffectHandle, StoreError> {
        self.inner.send(action).await
    }

    /// Read state through a closure.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&DashboardState) -> T,
    {
        self.inner.state(f).await
    }

    /// Snapshot the full dashboard state.
    pub async fn snapshot(&self) -> DashboardState {
        self.inner.state(DashboardState::clone).await
    }

    /// Subscribe to settled dashboard actions.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<DashboardAction> {
        self.inner.subscribe_actions()
    }
}
