//! Reducer for the transaction history.

use crate::notice::Notice;
use crate::transactions::actions::TransactionsAction;
use crate::transactions::environment::{
    ProductionTransactionsEnvironment, TransactionsEnvironment,
};
use crate::transactions::types::{HistoryScope, Transaction, TransactionsState};
use encore_api::types::TransactionScope;
use encore_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

type Effects = SmallVec<[Effect<TransactionsAction>; 4]>;

/// Reducer managing the paginated, read-only transaction table.
#[derive(Clone)]
pub struct TransactionsReducer;

impl TransactionsReducer {
    /// Create a new transactions reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn notify(
        state: &mut TransactionsState,
        notice: Notice,
        env: &ProductionTransactionsEnvironment,
    ) -> Effects {
        state.notice = Some(notice);
        smallvec![Effect::Delay {
            duration: env.config().notice_ttl,
            action: Box::new(TransactionsAction::DismissNotice),
        }]
    }

    fn start_load(
        state: &mut TransactionsState,
        env: &ProductionTransactionsEnvironment,
        page: u32,
    ) -> Effects {
        let session = env.session().snapshot();
        let Some(token) = session.token else {
            state.loading = false;
            return smallvec![Effect::None];
        };

        let scope = match state.scope {
            HistoryScope::Admin => TransactionScope::Admin,
            HistoryScope::User => match session.user_id {
                Some(user_id) => TransactionScope::User(user_id),
                None => {
                    state.loading = false;
                    return Self::notify(state, Notice::error("User not found"), env);
                },
            },
        };

        state.loading = true;
        let api = env.api();
        let limit = state.page.limit();

        smallvec![Effect::future(async move {
            Some(match api.list(&scope, page, limit, &token).await {
                Ok(fetched) => TransactionsAction::Loaded {
                    rows: fetched.data.into_iter().map(Transaction::from).collect(),
                    meta: fetched.meta,
                },
                Err(e) => TransactionsAction::LoadFailed {
                    message: e.user_message(),
                },
            })
        })]
    }
}

impl Default for TransactionsReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TransactionsReducer {
    type State = TransactionsState;
    type Action = TransactionsAction;
    type Environment = ProductionTransactionsEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects {
        match action {
            TransactionsAction::Load { page } => Self::start_load(state, env, page),

            TransactionsAction::Loaded { rows, meta } => {
                state.rows = rows;
                state.page.apply_meta(&meta);
                state.loading = false;
                smallvec![Effect::None]
            },

            TransactionsAction::LoadFailed { message } => {
                // Degrade to an empty table; never block the page.
                state.rows.clear();
                state.loading = false;
                Self::notify(state, Notice::error(message), env)
            },

            TransactionsAction::NextPage => {
                if state.page.next() {
                    let page = state.page.page();
                    Self::start_load(state, env, page)
                } else {
                    smallvec![Effect::None]
                }
            },

            TransactionsAction::PrevPage => {
                if state.page.prev() {
                    let page = state.page.page();
                    Self::start_load(state, env, page)
                } else {
                    smallvec![Effect::None]
                }
            },

            TransactionsAction::GoToPage { page } => {
                if state.page.go_to_page(page) {
                    Self::start_load(state, env, page)
                } else {
                    smallvec![Effect::None]
                }
            },

            TransactionsAction::DismissNotice => {
                state.notice = None;
                smallvec![Effect::None]
            },
        }
    }
}
