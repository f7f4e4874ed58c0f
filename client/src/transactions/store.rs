//! Store for the transactions feature.

use crate::transactions::actions::TransactionsAction;
use crate::transactions::environment::{
    ProductionTransactionsEnvironment, TransactionsEnvironment,
};
use crate::transactions::reducer::TransactionsReducer;
use crate::transactions::types::{HistoryScope, TransactionsState};
use encore_runtime::{EffectHandle, Store, StoreError};
use tokio::sync::broadcast;

/// Store managing one transaction history table.
pub struct TransactionsStore {
    inner: Store<
        TransactionsState,
        TransactionsAction,
        ProductionTransactionsEnvironment,
        TransactionsReducer,
    >,
}

impl TransactionsStore {
    /// Create a new transactions store for the given history scope.
    #[must_use]
    pub fn new(environment: ProductionTransactionsEnvironment, scope: HistoryScope) -> Self {
        let page_size = environment.config().page_size;
        Self {
            inner: Store::new(
                TransactionsState::new(scope, page_size),
                TransactionsReducer::new(),
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
    pub async fn send(&self, action: TransactionsAction) -> Result<EffectHandle, StoreError> {
        self.inner.send(action).await
    }

    /// Read state through a closure.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TransactionsState) -> T,
    {
        self.inner.state(f).await
    }

    /// Snapshot the full transactions state.
    pub async fn snapshot(&self) -> TransactionsState {
        self.inner.state(TransactionsState::clone).await
    }

    /// Subscribe to settled transaction actions.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<TransactionsAction> {
        self.inner.subscribe_actions()
    }
}
