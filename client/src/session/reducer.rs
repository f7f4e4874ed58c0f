//! Reducer for the session state machine.

use crate::notice::Notice;
use crate::session::actions::SessionAction;
use crate::session::environment::{ProductionSessionEnvironment, SessionEnvironment};
use crate::session::state::{PersistedSession, SessionState};
use encore_api::types::{LoginRequest, RegisterRequest, Role};
use encore_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer managing the authenticated session.
///
/// Restoration, login, and registration all funnel through the same
/// `/me`-verified path: a token is never trusted until the canonical user
/// record has been fetched with it.
#[derive(Clone)]
pub struct SessionReducer;

impl SessionReducer {
    /// Create a new session reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Set a notice and schedule its auto-dismissal.
    fn notify(
        state: &mut SessionState,
        notice: Notice,
        env: &ProductionSessionEnvironment,
    ) -> SmallVec<[Effect<SessionAction>; 4]> {
        state.notice = Some(notice);
        smallvec![Effect::Delay {
            duration: env.config().notice_ttl,
            action: Box::new(SessionAction::DismissNotice),
        }]
    }

    /// Reset identity everywhere: memory, durable storage, shared context.
    fn clear_session(state: &mut SessionState, env: &ProductionSessionEnvironment) {
        state.clear_identity();
        if let Err(e) = env.storage().clear() {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
        env.context().clear();
    }
}

impl Default for SessionReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = ProductionSessionEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SessionAction::Restore => {
                let persisted = match env.storage().load() {
                    Ok(persisted) => persisted,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read persisted session");
                        None
                    },
                };

                let Some(persisted) = persisted else {
                    state.loading = false;
                    return smallvec![Effect::None];
                };

                // Adopt the persisted identity as a hint until /me settles.
                state.token = Some(persisted.token.clone());
                state.role = persisted.role;
                state.user = persisted.user.clone();
                state.established_at = Some(persisted.established_at);
                state.loading = true;
                env.context().set(
                    persisted.token.clone(),
                    persisted.role,
                    persisted.user.map(|user| user.id),
                );

                let api = env.api();
                let token = persisted.token;
                smallvec![Effect::future(async move {
                    Some(match api.me(&token).await {
                        Ok(me) => SessionAction::RestoreVerified { user: me.into() },
                        Err(e) => SessionAction::RestoreFailed {
                            message: e.user_message(),
                        },
                    })
                })]
            },

            SessionAction::RestoreVerified { user } => {
                // /me is ground truth for the role.
                state.role = user.role;
                if let Some(token) = state.token.clone() {
                    env.context().set(token, user.role, Some(user.id.clone()));
                }
                state.user = Some(user);
                state.loading = false;
                smallvec![Effect::None]
            },

            SessionAction::RestoreFailed { message } => {
                tracing::warn!(%message, "Session restore failed, resetting to guest");
                Self::clear_session(state, env);
                state.loading = false;
                Self::notify(state, Notice::error(message), env)
            },

            SessionAction::Login { email, password } => {
                if state.authenticating {
                    return smallvec![Effect::None];
                }
                state.authenticating = true;

                let api = env.api();
                smallvec![Effect::future(async move {
                    let request = LoginRequest { email, password };
                    Some(match api.login(&request).await {
                        Ok(response) => SessionAction::AuthSucceeded {
                            token: response.access_token,
                            role_hint: response.role,
                        },
                        Err(e) => SessionAction::AuthFailed {
                            message: e.user_message(),
                        },
                    })
                })]
            },

            SessionAction::Register {
                name,
                email,
                password,
            } => {
                if state.authenticating {
                    return smallvec![Effect::None];
                }
                state.authenticating = true;

                let api = env.api();
                smallvec![Effect::future(async move {
                    let request = RegisterRequest {
                        name,
                        email,
                        password,
                        role: Role::User,
                    };
                    Some(match api.register(&request).await {
                        Ok(response) => SessionAction::AuthSucceeded {
                            token: response.access_token,
                            role_hint: response.role,
                        },
                        Err(e) => SessionAction::AuthFailed {
                            message: e.user_message(),
                        },
                    })
                })]
            },

            SessionAction::AuthSucceeded { token, role_hint } => {
                if let Some(role) = role_hint {
                    state.role = role;
                }

                // Resolve the canonical profile before committing anything.
                let api = env.api();
                let bearer = token.clone();
                smallvec![Effect::future(async move {
                    Some(match api.me(&bearer).await {
                        Ok(me) => SessionAction::SessionEstablished {
                            token,
                            user: me.into(),
                        },
                        Err(e) => SessionAction::AuthFailed {
                            message: e.user_message(),
                        },
                    })
                })]
            },

            SessionAction::SessionEstablished { token, user } => {
                state.authenticating = false;
                state.loading = false;
                state.token = Some(token.clone());
                state.role = user.role;
                state.user = Some(user.clone());
                let now = env.clock().now();
                state.established_at = Some(now);

                // Memory, durable storage, and the shared context commit
                // together.
                let persisted = PersistedSession {
                    token: token.clone(),
                    role: user.role,
                    user: Some(user.clone()),
                    established_at: now,
                };
                if let Err(e) = env.storage().save(&persisted) {
                    tracing::warn!(error = %e, "Failed to persist session");
                }
                env.context().set(token, user.role, Some(user.id));

                tracing::info!(role = user.role.as_str(), "Session established");
                smallvec![Effect::None]
            },

            SessionAction::AuthFailed { message } => {
                state.authenticating = false;
                state.loading = false;
                Self::notify(state, Notice::error(message), env)
            },

            SessionAction::Logout => {
                Self::clear_session(state, env);
                state.loading = false;
                smallvec![Effect::None]
            },

            SessionAction::DismissNotice => {
                state.notice = None;
                smallvec![Effect::None]
            },
        }
    }
}
