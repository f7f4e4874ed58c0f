//! Reservation backend client implementation

use crate::error::ApiError;
use crate::types::{
    AuthResponse, AuthToken, ConcertDto, ConcertId, CreateConcertRequest, DashboardStats,
    LoginRequest, MeResponse, Paginated, RegisterRequest, ReservationCreated, TransactionDto,
    TransactionScope, UserId,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash
    /// (e.g. `http://localhost:3000/api/v1`).
    pub base_url: String,

    /// Per-request timeout. Every call settles within this bound, so a
    /// stalled request can never leave the UI permanently in flight.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000/api/v1")
    }
}

/// Reservation backend API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new client.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
            timeout: config.timeout,
        }
    }

    /// List concerts, optionally scoped to a user's reservation view.
    ///
    /// With `user` set, each returned concert carries the requesting
    /// user's `reservationId`/`reservationStatus`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies.
    pub async fn list_concerts(
        &self,
        page: u32,
        limit: u32,
        user: Option<&UserId>,
        token: &AuthToken,
    ) -> Result<Paginated<ConcertDto>, ApiError> {
        let mut url = format!(
            "{}/concerts/list?page={page}&limit={limit}",
            self.base_url
        );
        if let Some(user) = user {
            url.push_str(&format!("&userId={user}"));
        }

        self.execute(
            self.client.get(url).bearer_auth(token.as_str()),
            "Failed to fetch concerts",
        )
        .await
    }

    /// Create a concert (admin only).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies.
    pub async fn create_concert(
        &self,
        request: &CreateConcertRequest,
        token: &AuthToken,
    ) -> Result<ConcertDto, ApiError> {
        self.execute(
            self.client
                .post(format!("{}/concerts/create", self.base_url))
                .bearer_auth(token.as_str())
                .json(request),
            "Failed to create concert",
        )
        .await
    }

    /// Soft-cancel a concert (admin only).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies.
    pub async fn cancel_concert(
        &self,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<ConcertDto, ApiError> {
        #[derive(Serialize)]
        struct CancelBody<'a> {
            status: &'a str,
        }

        self.execute(
            self.client
                .patch(format!("{}/concerts/{concert}/cancel", self.base_url))
                .bearer_auth(token.as_str())
                .json(&CancelBody {
                    status: "cancelled",
                }),
            "Failed to cancel concert",
        )
        .await
    }

    /// Reserve a seat on a concert for a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies.
    pub async fn reserve(
        &self,
        user: &UserId,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<ReservationCreated, ApiError> {
        self.execute(
            self.client
                .post(format!("{}/reserve/{user}/{concert}", self.base_url))
                .bearer_auth(token.as_str()),
            "Failed to reserve",
        )
        .await
    }

    /// Cancel a user's reservation on a concert.
    ///
    /// The backend responds 2xx with no required body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, or non-2xx
    /// responses.
    pub async fn cancel_reservation(
        &self,
        user: &UserId,
        concert: &ConcertId,
        token: &AuthToken,
    ) -> Result<(), ApiError> {
        let response = self
            .send(
                self.client
                    .delete(format!("{}/reserve/{user}/{concert}", self.base_url))
                    .bearer_auth(token.as_str()),
            )
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response, "Failed to cancel").await)
        }
    }

    /// Fetch aggregate dashboard statistics (admin only).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies.
    pub async fn dashboard_stats(&self, token: &AuthToken) -> Result<DashboardStats, ApiError> {
        self.execute(
            self.client
                .get(format!("{}/reserve/dashboard", self.base_url))
                .bearer_auth(token.as_str()),
            "Failed to fetch dashboard stats",
        )
        .await
    }

    /// List transactions, either all of them (admin) or one user's.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies.
    pub async fn list_transactions(
        &self,
        scope: &TransactionScope,
        page: u32,
        limit: u32,
        token: &AuthToken,
    ) -> Result<Paginated<TransactionDto>, ApiError> {
        let scope_param = match scope {
            TransactionScope::Admin => "admin=true".to_string(),
            TransactionScope::User(user) => format!("userId={user}"),
        };
        let url = format!(
            "{}/transactions/list?{scope_param}&page={page}&limit={limit}",
            self.base_url
        );

        self.execute(
            self.client.get(url).bearer_auth(token.as_str()),
            "Failed to fetch transactions",
        )
        .await
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies. A 401 carries the backend's
    /// message (e.g. `"Invalid credentials"`) verbatim.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.execute(
            self.client
                .post(format!("{}/user/auth/login", self.base_url))
                .json(request),
            "Login failed",
        )
        .await
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.execute(
            self.client
                .post(format!("{}/user/auth/register", self.base_url))
                .json(request),
            "Sign Up failed",
        )
        .await
    }

    /// Fetch the canonical record of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, timeouts, non-2xx
    /// responses, or unparseable bodies.
    pub async fn me(&self, token: &AuthToken) -> Result<MeResponse, ApiError> {
        self.execute(
            self.client
                .get(format!("{}/user/auth/me", self.base_url))
                .bearer_auth(token.as_str()),
            "Failed to fetch user info",
        )
        .await
    }

    /// Send a request with the configured timeout applied.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout
                } else {
                    ApiError::Network(e.to_string())
                }
            })
    }

    /// Send a request and parse the 2xx body as `T`.
    ///
    /// On non-2xx, reads the JSON error body and fails with the
    /// server-supplied `message`, falling back to `fallback` when the body
    /// is absent or unparseable.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;

        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            Err(Self::error_from_response(response, fallback).await)
        }
    }

    /// Normalize a non-2xx response into [`ApiError::Api`].
    async fn error_from_response(response: Response, fallback: &str) -> ApiError {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            message: Option<String>,
        }

        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback.to_string());

        ApiError::Api { status, message }
    }
}
