//! Environment for the concerts reducer.

use crate::config::ClientConfig;
use crate::session::context::SessionContext;
use async_trait::async_trait;
use encore_api::ApiClient;
use encore_api::error::ApiError;
use encore_api::types::{
    AuthToken, ConcertDto, ConcertId, CreateConcertRequest, Paginated, ReservationCreated, UserId,
};
use std::sync::Arc;

/// The concert and reservation endpoints the reducer calls.
#[async_trait]
pub trait ConcertsApi: Send + Sync {
    /// `GET /concerts/list`
    async fn list(
        &self,
        page: u32,
        limit: u32,
        user: Option<&UserId>,
        token: &AuthToken,
    ) -> Result<Paginated<ConcertDto>, ApiError>;

    /// `POST /reserve/{userId}/{concertId}`
    async fn reserve(
        &self,
        user: &UserId,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<ReservationCreated, ApiError>;

    /// `DELETE /reserve/{userId}/{concertId}`
    async fn cancel_reservation(
        &self,
        user: &UserId,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<(), ApiError>;

    /// `PATCH /concerts/{id}/cancel`
    async fn cancel_concert(
        &self,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<ConcertDto, ApiError>;

    /// `POST /concerts/create`
    async fn create(
        &self,
        request: &CreateConcertRequest,
        token: &AuthToken,
    ) -> Result<ConcertDto, ApiError>;
}

#[async_trait]
impl ConcertsApi for ApiClient {
    async fn list(
        &self,
        page: u32,
        limit: u32,
        user: Option<&UserId>,
        token: &AuthToken,
    ) -> Result<Paginated<ConcertDto>, ApiError> {
        self.list_concerts(page, limit, user, token).await
    }

    async fn reserve(
        &self,
        user: &UserId,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<ReservationCreated, ApiError> {
        ApiClient::reserve(self, user, concert, token).await
    }

    async fn cancel_reservation(
        &self,
        user: &UserId,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<(), ApiError> {
        ApiClient::cancel_reservation(self, user, concert, token).await
    }

    async fn cancel_concert(
        &self,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<ConcertDto, ApiError> {
        ApiClient::cancel_concert(self, concert, token).await
    }

    async fn create(
        &self,
        request: &CreateConcertRequest,
        token: &AuthToken,
    ) -> Result<ConcertDto, ApiError> {
        self.create_concert(request, token).await
    }
}

/// Environment dependencies for the concerts reducer.
pub trait ConcertsEnvironment: Send + Sync {
    /// Concert endpoints.
    fn api(&self) -> Arc<dyn ConcertsApi>;

    /// Shared session identity.
    fn session(&self) -> &SessionContext;

    /// Client configuration.
    fn config(&self) -> &ClientConfig;
}

/// Production environment for the concerts reducer.
#[derive(Clone)]
pub struct ProductionConcertsEnvironment {
    api: Arc<dyn ConcertsApi>,
    session: SessionContext,
    config: Arc<ClientConfig>,
}

impl ProductionConcertsEnvironment {
    /// Create a production environment.
    #[must_use]
    pub fn new(api: Arc<dyn ConcertsApi>, session: SessionContext, config: ClientConfig) -> Self {
        Self {
            api,
            session,
            config: Arc::new(config),
        }
    }
}

impl ConcertsEnvironment for ProductionConcertsEnvironment {
    fn api(&self) -> Arc<dyn ConcertsApi> {
        Arc::clone(&self.api)
    }

    fn session(&self) -> &SessionContext {
        &self.session
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
