//! Environment for the session reducer.
//!
//! Dependencies are injected via traits: the auth endpoints, durable
//! storage, the shared identity context, and a clock. Tests swap in mocks
//! for any of them.

use crate::config::ClientConfig;
use crate::session::context::SessionContext;
use crate::session::storage::SessionStorage;
use async_trait::async_trait;
use encore_api::error::ApiError;
use encore_api::types::{AuthResponse, AuthToken, LoginRequest, MeResponse, RegisterRequest};
use encore_api::ApiClient;
use encore_core::environment::{Clock, SystemClock};
use std::sync::Arc;

/// The auth endpoints the session reducer calls.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /user/auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /user/auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// `GET /user/auth/me`
    async fn me(&self, token: &AuthToken) -> Result<MeResponse, ApiError>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        ApiClient::login(self, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        ApiClient::register(self, request).await
    }

    async fn me(&self, token: &AuthToken) -> Result<MeResponse, ApiError> {
        ApiClient::me(self, token).await
    }
}

/// Environment dependencies for the session reducer.
pub trait SessionEnvironment: Send + Sync {
    /// Auth endpoints.
    fn api(&self) -> Arc<dyn AuthApi>;

    /// Durable session storage.
    fn storage(&self) -> &dyn SessionStorage;

    /// Shared identity handle published to the other features.
    fn context(&self) -> &SessionContext;

    /// Clock for session timestamps.
    fn clock(&self) -> &dyn Clock;

    /// Client configuration.
    fn config(&self) -> &ClientConfig;
}

/// Production environment for the session reducer.
#[derive(Clone)]
pub struct ProductionSessionEnvironment {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn SessionStorage>,
    context: SessionContext,
    clock: Arc<dyn Clock>,
    config: Arc<ClientConfig>,
}

impl ProductionSessionEnvironment {
    /// Create a production environment with the system clock.
    #[must_use]
    pub fn new(
        api: Arc<dyn AuthApi>,
        storage: Arc<dyn SessionStorage>,
        context: SessionContext,
        config: ClientConfig,
    ) -> Self {
        Self {
            api,
            storage,
            context,
            clock: Arc::new(SystemClock),
            config: Arc::new(config),
        }
    }

    /// Replace the clock (deterministic time in tests).
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl SessionEnvironment for ProductionSessionEnvironment {
    fn api(&self) -> Arc<dyn AuthApi> {
        Arc::clone(&self.api)
    }

    fn storage(&self) -> &dyn SessionStorage {
        self.storage.as_ref()
    }

    fn context(&self) -> &SessionContext {
        &self.context
    }

    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
