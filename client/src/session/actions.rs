//! Actions for the session reducer.

use crate::session::state::UserProfile;
use encore_api::types::{AuthToken, Role};
use serde::{Deserialize, Serialize};

/// Actions processed by the session reducer.
///
/// User intents (`Restore`, `Login`, `Register`, `Logout`) come from
/// views; the settled variants are fed back by effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionAction {
    /// Hydrate the session from durable storage on startup.
    ///
    /// If a token is persisted, its identity is adopted as a hint and
    /// verified through `/me`. This is the only place persisted and
    /// server-verified identity are synchronized.
    Restore,

    /// `/me` accepted the persisted token.
    RestoreVerified {
        /// Canonical user record from `/me`
        user: UserProfile,
    },

    /// `/me` rejected the persisted token (or the call failed).
    ///
    /// An unverifiable session is treated as anonymous: all session state
    /// including durable storage is cleared.
    RestoreFailed {
        /// Why verification failed
        message: String,
    },

    /// Authenticate with email and password.
    Login {
        /// Account email
        email: String,
        /// Account password
        password: String,
    },

    /// Create an account (always with the `user` role, as the sign-up
    /// form does) and sign in.
    Register {
        /// Display name
        name: String,
        /// Account email
        email: String,
        /// Account password
        password: String,
    },

    /// Login or register returned a token.
    ///
    /// Some backend variants omit the role from the login response, and
    /// none return the full profile, so identity always resolves through
    /// a follow-up `/me` call before the session is committed.
    AuthSucceeded {
        /// Bearer token from the auth response
        token: AuthToken,
        /// Role from the auth response, when present (a hint)
        role_hint: Option<Role>,
    },

    /// Canonical identity resolved; commit the session to memory and
    /// durable storage together.
    SessionEstablished {
        /// Bearer token
        token: AuthToken,
        /// Verified user record
        user: UserProfile,
    },

    /// Login or register failed; the server's message is surfaced
    /// verbatim.
    AuthFailed {
        /// Error message for the notice
        message: String,
    },

    /// Clear the session from memory and durable storage together.
    Logout,

    /// Clear the current notice.
    DismissNotice,
}
