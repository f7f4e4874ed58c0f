//! Client configuration.
//!
//! Configuration values should be provided by the application, not
//! hardcoded. Builders follow the `with_*` idiom.

use encore_api::ApiConfig;
use std::time::Duration;

/// Configuration for the client feature stores.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the reservation backend, without a trailing slash
    /// (e.g. `http://localhost:3000/api/v1`).
    pub base_url: String,

    /// Items per page for concert and transaction listings.
    ///
    /// Default: 5
    pub page_size: u32,

    /// Per-request timeout. Guarantees an in-flight action always
    /// settles, so no concert card stays locked forever.
    ///
    /// Default: 10 seconds
    pub request_timeout: Duration,

    /// How long a transient notice stays visible before auto-dismissal.
    ///
    /// Default: 5 seconds
    pub notice_ttl: Duration,

    /// Whether a concert whose reservation was cancelled may be reserved
    /// again. The backend variants disagree on this, so both behaviors
    /// are selectable; the strict variant (false) treats cancellation as
    /// terminal.
    ///
    /// Default: false
    pub allow_rebook_after_cancel: bool,
}

impl ClientConfig {
    /// Create a configuration for the given backend base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: 5,
            request_timeout: Duration::from_secs(10),
            notice_ttl: Duration::from_secs(5),
            allow_rebook_after_cancel: false,
        }
    }

    /// Set the listing page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the notice time-to-live.
    #[must_use]
    pub const fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    /// Allow or forbid rebooking after a cancelled reservation.
    #[must_use]
    pub const fn with_rebook_after_cancel(mut self, allow: bool) -> Self {
        self.allow_rebook_after_cancel = allow;
        self
    }

    /// Derive the HTTP client configuration.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone()).with_timeout(self.request_timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000/api/v1")
    }
}
