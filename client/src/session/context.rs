//! Shared session identity handle.
//!
//! Instead of ambient global state, the session reducer publishes the
//! current identity into an explicit, cloneable [`SessionContext`], and
//! every feature environment that needs the token or user id holds its own
//! handle. Tests inject a context pre-filled with a fake identity.

use encore_api::types::{AuthToken, Role, UserId};
use std::sync::{Arc, RwLock};

/// Point-in-time view of the session identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Bearer token, absent for guests
    pub token: Option<AuthToken>,
    /// Authenticated user id, when known
    pub user_id: Option<UserId>,
    /// Current role
    pub role: Role,
}

impl SessionSnapshot {
    /// Token and user id together, when both are present.
    ///
    /// Protected actions require both; reserve/cancel fail locally as
    /// unauthorized otherwise.
    #[must_use]
    pub fn authenticated(&self) -> Option<(AuthToken, UserId)> {
        match (&self.token, &self.user_id) {
            (Some(token), Some(user_id)) => Some((token.clone(), user_id.clone())),
            _ => None,
        }
    }
}

/// Injectable, shareable session identity.
///
/// Only the session reducer writes it; readers take cheap snapshots.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionSnapshot>>,
}

impl SessionContext {
    /// Create an empty (guest) context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context pre-filled with an identity (for tests and demos).
    #[must_use]
    pub fn with_identity(token: AuthToken, role: Role, user_id: Option<UserId>) -> Self {
        let context = Self::new();
        context.set(token, role, user_id);
        context
    }

    /// Current identity snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Publish a new identity.
    pub fn set(&self, token: AuthToken, role: Role, user_id: Option<UserId>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = SessionSnapshot {
                token: Some(token),
                user_id,
                role,
            };
        }
    }

    /// Reset to guest.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = SessionSnapshot::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_set_and_clear() {
        let context = SessionContext::new();
        assert_eq!(context.snapshot(), SessionSnapshot::default());

        context.set(
            AuthToken::new("tok"),
            Role::User,
            Some(UserId::new("u1")),
        );
        let snapshot = context.snapshot();
        assert_eq!(snapshot.role, Role::User);
        assert!(snapshot.authenticated().is_some());

        context.clear();
        assert_eq!(context.snapshot(), SessionSnapshot::default());
    }

    #[test]
    fn authenticated_requires_both_token_and_user() {
        let context = SessionContext::with_identity(AuthToken::new("tok"), Role::User, None);
        assert!(context.snapshot().authenticated().is_none());
    }
}
