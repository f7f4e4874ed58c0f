//! Environment for the transactions reducer.

use crate::config::ClientConfig;
use crate::session::context::SessionContext;
use async_trait::async_trait;
use encore_api::ApiClient;
use encore_api::error::ApiError;
use encore_api::types::{AuthToken, Paginated, TransactionDto, TransactionScope};
use std::sync::Arc;

/// The transaction history endpoint.
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    /// `GET /transactions/list`
    async fn list(
        &self,
        scope: &TransactionScope,
        page: u32,
        limit: u32,
        token: &AuthToken,
    ) -> Result<Paginated<TransactionDto>, ApiError>;
}

#[async_trait]
impl TransactionsApi for ApiClient {
    async fn list(
        &self,
        scope: &TransactionScope,
        page: u32,
        limit: u32,
        token: &AuthToken,
    ) -> Result<Paginated<TransactionDto>, ApiError> {
        self.list_transactions(scope, page, limit, token).await
    }
}

/// Environment dependencies for the transactions reducer.
pub trait TransactionsEnvironment: Send + Sync {
    /// Transaction history endpoint.
    fn api(&self) -> Arc<dyn TransactionsApi>;

    /// Shared session identity.
    fn session(&self) -> &SessionContext;

    /// Client configuration.
    fn config(&self) -> &ClientConfig;
}

/// Production environment for the transactions reducer.
#[derive(Clone)]
pub struct ProductionTransactionsEnvironment {
    api: Arc<dyn TransactionsApi>,
    session: SessionContext,
    config: Arc<ClientConfig>,
}

impl ProductionTransactionsEnvironment {
    /// Create a production environment.
    #[must_use]
    pub fn new(
        api: Arc<dyn TransactionsApi>,
        session: SessionContext,
        config: ClientConfig,
    ) -> Self {
        Self {
            api,
            session,
            config: Arc::new(config),
        }
    }
}

impl TransactionsEnvironment for ProductionTransactionsEnvironment {
    fn api(&self) -> Arc<dyn TransactionsApi> {
        Arc::clone(&self.api)
    }

    fn session(&self) -> &SessionContext {
        &self.session
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
