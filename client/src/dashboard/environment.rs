//! Environment for the dashboard reducer.

use crate::config::ClientConfig;
use crate::session::context::SessionContext;
use async_trait::async_trait;
use encore_api::ApiClient;
use encore_api::error::ApiError;
use encore_api::types::{AuthToken, DashboardStats};
use std::sync::Arc;

/// The dashboard statistics endpoint.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /reserve/dashboard`
    async fn stats(&self, token: &AuthToken) -> Result<DashboardStats, ApiError>;
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn stats(&self, token: &AuthToken) -> Result<DashboardStats, ApiError> {
        self.dashboard_stats(token).await
    }
}

/// Environment dependencies for the dashboard reducer.
pub trait DashboardEnvironment: Send + Sync {
    /// Dashboard statistics endpoint.
    fn api(&self) -> Arc<dyn DashboardApi>;

    /// Shared session identity.
    fn session(&self) -> &SessionContext;

    /// Client configuration.
    fn config(&self) -> &ClientConfig;
}

/// Production environment for the dashboard reducer.
#[derive(Clone)]
pub struct ProductionDashboardEnvironment {
    api: Arc<dyn DashboardApi>,
    session: SessionContext,
    config: Arc<ClientConfig>,
}

impl ProductionDashboardEnvironment {
    /// Create a production environment.
    #[must_use]
    pub fn new(api: Arc<dyn DashboardApi>, session: SessionContext, config: ClientConfig) -> Self {
        Self {
            api,
            session,
            config: Arc::new(config),
        }
    }
}

impl DashboardEnvironment for ProductionDashboardEnvironment {
    fn api(&self) -> Arc<dyn DashboardApi> {
        Arc::clone(&self.api)
    }

    fn session(&self) -> &SessionContext {
        &self.session
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
