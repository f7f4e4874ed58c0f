//! Store for the session feature.

use crate::session::actions::SessionAction;
use crate::session::environment::ProductionSessionEnvironment;
use crate::session::reducer::SessionReducer;
use crate::session::state::SessionState;
use encore_runtime::{EffectHandle, Store, StoreError};
use std::time::Duration;
use tokio::sync::broadcast;

/// Store managing the authenticated session.
///
/// A thin wrapper over the runtime [`Store`] with the session types fixed.
pub struct SessionStore {
    inner: Store<SessionState, SessionAction, ProductionSessionEnvironment, SessionReducer>,
}

impl SessionStore {
    /// Create a new session store in the initial (loading guest) state.
    #[must_use]
    pub fn new(environment: ProductionSessionEnvironment) -> Self {
        Self {
            inner: Store::new(SessionState::default(), SessionReducer::new(), environment),
        }
    }

    /// Dispatch an action.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn send(&self, action: SessionAction) -> Result<EffectHandle, StoreError> {
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
        action: SessionAction,
        predicate: F,
        timeout: Duration,
    ) -> Result<SessionAction, StoreError>
    where
        F: Fn(&SessionAction) -> bool,
    {
        self.inner.send_and_wait_for(action, predicate, timeout).await
    }

    /// Read state through a closure.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&SessionState) -> T,
    {
        self.inner.state(f).await
    }

    /// Snapshot the full session state.
    pub async fn snapshot(&self) -> SessionState {
        self.inner.state(SessionState::clone).await
    }

    /// Subscribe to settled session actions.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<SessionAction> {
        self.inner.subscribe_actions()
    }
}
