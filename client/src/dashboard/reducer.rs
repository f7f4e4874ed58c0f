//! Reducer for the admin dashboard.

use crate::dashboard::actions::DashboardAction;
use crate::dashboard::environment::{DashboardEnvironment, ProductionDashboardEnvironment};
use crate::dashboard::types::DashboardState;
use crate::notice::Notice;
use encore_api::types::DashboardStats;
use encore_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

type Effects = SmallVec<[Effect<DashboardAction>; 4]>;

/// Reducer managing the aggregate statistics card.
#[derive(Clone)]
pub struct DashboardReducer;

impl DashboardReducer {
    /// Create a new dashboard reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DashboardReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Action = DashboardAction;
    type Environment = ProductionDashboardEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects {
        match action {
            DashboardAction::Load => {
                let session = env.session().snapshot();
                let Some(token) = session.token else {
                    state.loading = false;
                    return smallvec![Effect::None];
                };

                state.loading = true;
                let api = env.api();
                smallvec![Effect::future(async move {
                    Some(match api.stats(&token).await {
                        Ok(stats) => DashboardAction::Loaded { stats },
                        Err(e) => DashboardAction::LoadFailed {
                            message: e.user_message(),
                        },
                    })
                })]
            },

            DashboardAction::Loaded { stats } => {
                state.stats = stats;
                state.loading = false;
                smallvec![Effect::None]
            },

            DashboardAction::LoadFailed { message } => {
                // Degrade to zeros; the dashboard stays usable.
                state.stats = DashboardStats::default();
                state.loading = false;
                state.notice = Some(Notice::error(message));
                smallvec![Effect::Delay {
                    duration: env.config().notice_ttl,
                    action: Box::new(DashboardAction::DismissNotice),
                }]
            },

            DashboardAction::DismissNotice => {
                state.notice = None;
                smallvec![Effect::None]
            },
        }
    }
}
