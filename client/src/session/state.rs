//! Session state types.

use crate::notice::Notice;
use chrono::{DateTime, Utc};
use encore_api::types::{AuthToken, MeResponse, Role, UserId};
use serde::{Deserialize, Serialize};

/// Canonical record of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Role as verified by `/me`
    pub role: Role,
}

impl From<MeResponse> for UserProfile {
    fn from(me: MeResponse) -> Self {
        Self {
            id: me.id,
            name: me.name.unwrap_or_default(),
            email: me.email,
            role: me.role,
        }
    }
}

/// The session document written to durable storage.
///
/// One flat JSON document, no versioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Bearer token
    pub token: AuthToken,
    /// Role at the time the session was established (a hint on restore)
    pub role: Role,
    /// User record at the time the session was established
    pub user: Option<UserProfile>,
    /// When the session was last established
    pub established_at: DateTime<Utc>,
}

/// Root session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Bearer token, absent for guests
    pub token: Option<AuthToken>,

    /// Current role. A hint until `loading` is false; the `/me` response
    /// is ground truth.
    pub role: Role,

    /// Canonical user record, once verified
    pub user: Option<UserProfile>,

    /// True until session restoration has settled
    pub loading: bool,

    /// True while a login/register call is in flight
    pub authenticating: bool,

    /// When the current session was established
    pub established_at: Option<DateTime<Utc>>,

    /// Transient notice for the views
    pub notice: Option<Notice>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            role: Role::Guest,
            user: None,
            loading: true,
            authenticating: false,
            established_at: None,
            notice: None,
        }
    }
}

impl SessionState {
    /// Whether a verified session is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Reset the identity fields to guest. Durable storage and the shared
    /// context are the reducer's responsibility.
    pub fn clear_identity(&mut self) {
        self.token = None;
        self.role = Role::Guest;
        self.user = None;
        self.established_at = None;
        self.authenticating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_loading_guest() {
        let state = SessionState::default();
        assert_eq!(state.role, Role::Guest);
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn profile_from_me_defaults_missing_name() {
        let me = MeResponse {
            id: UserId::new("u1"),
            name: None,
            email: "fan@example.com".to_string(),
            role: Role::User,
        };
        let profile = UserProfile::from(me);
        assert_eq!(profile.name, "");
        assert_eq!(profile.role, Role::User);
    }
}
