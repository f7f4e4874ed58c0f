//! # Encore API Client
//!
//! Typed HTTP client for the concert reservation backend.
//!
//! Wraps every REST endpoint the client consumes: concert listing and
//! administration, seat reservation, dashboard statistics, transaction
//! history, and authentication. Authenticated calls carry a bearer token;
//! non-2xx responses are normalized into [`ApiError`] with the
//! server-supplied `message` when one is present.
//!
//! Every call is single-shot - there are no retries - and every request
//! carries a timeout so a stalled call always settles.
//!
//! ## Example
//!
//! ```no_run
//! use encore_api::{ApiClient, ApiConfig};
//! use encore_api::types::LoginRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::default());
//!
//!     let auth = client
//!         .login(&LoginRequest {
//!             email: "fan@example.com".to_string(),
//!             password: "secret".to_string(),
//!         })
//!         .await?;
//!
//!     println!("token: {}", auth.access_token.as_str());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
