//! Store for the concerts feature.

use crate::concerts::actions::ConcertsAction;
use crate::concerts::environment::{ConcertsEnvironment, ProductionConcertsEnvironment};
use crate::concerts::reducer::ConcertsReducer;
use crate::concerts::types::{ConcertsState, ListScope};
use encore_runtime::{EffectHandle, Store, StoreError};
use std::time::Duration;
use tokio::sync::broadcast;

/// Store managing the concert list for one dashboard.
pub struct ConcertsStore {
    inner: Store<ConcertsState, ConcertsAction, ProductionConcertsEnvironment, ConcertsReducer>,
}

impl ConcertsStore {
    /// Create a new concerts store for the given listing scope.
    #[must_use]
    pub fn new(environment: ProductionConcertsEnvironment, scope: ListScope) -> Self {
        let page_size = environment.config().page_size;
        Self {
            inner: Store::new(
                ConcertsState::new(scope, page_size),
                ConcertsReducer::new(),
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
    pub async fn send(&self, action: ConcertsAction) -> Result<EffectHandle, StoreError> {
        self.inner.send(action).await
    }

    /// Dispatch an action and wait for a matching settled action.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] when no matching action arrives in
    /// time, or the send errors.
    pub async fn send_and_wait_for<F>(
        &self,
        action: ConcertsAction,
        predicate: F,
        timeout: Duration,
    ) -> Result<ConcertsAction, StoreError>
    where
        F: Fn(&ConcertsAction) -> bool,
    {
        self.inner.send_and_wait_for(action, predicate, timeout).await
    }

    /// Read state through a closure.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&ConcertsState) -> T,
    {
        self.inner.state(f).await
    }

    /// Snapshot the full concerts state.
    pub async fn snapshot(&self) -> ConcertsState {
        self.inner.state(ConcertsState::clone).await
    }

    /// Subscribe to settled concert actions.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<ConcertsAction> {
        self.inner.subscribe_actions()
    }
}
