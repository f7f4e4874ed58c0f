//! Unit tests for the transaction history.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use crate::config::ClientConfig;
use crate::mocks::MockTransactionsApi;
use crate::session::context::SessionContext;
use crate::transactions::actions::TransactionsAction;
use crate::transactions::environment::ProductionTransactionsEnvironment;
use crate::transactions::reducer::TransactionsReducer;
use crate::transactions::types::{HistoryScope, Transaction, TransactionsState};
use chrono::Utc;
use encore_api::types::{AuthToken, PageMeta, ReservationId, ReservationStatus, Role, UserId};
use encore_core::reducer::Reducer;
use encore_testing::reducer_test::assertions::{assert_has_future_effect, assert_no_effects};
use std::sync::Arc;

fn env(context: SessionContext) -> ProductionTransactionsEnvironment {
    ProductionTransactionsEnvironment::new(
        Arc::new(MockTransactionsApi::new()),
        context,
        ClientConfig::new("http://test/api/v1"),
    )
}

fn user_env() -> ProductionTransactionsEnvironment {
    env(SessionContext::with_identity(
        AuthToken::new("tok"),
        Role::User,
        Some(UserId::new("u1")),
    ))
}

fn row(id: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        reservation_id: ReservationId::new("r1"),
        username: "fan".to_string(),
        concert_name: "Summer Festival".to_string(),
        action: ReservationStatus::Confirmed,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn meta(total: u64, page: u32, pages: u32) -> PageMeta {
    PageMeta {
        total,
        page,
        limit: 5,
        pages,
    }
}

#[test]
fn load_issues_a_fetch_for_an_authenticated_user() {
    let env = user_env();
    let mut state = TransactionsState::new(HistoryScope::User, 5);

    let effects =
        TransactionsReducer::new().reduce(&mut state, TransactionsAction::Load { page: 1 }, &env);

    assert!(state.loading);
    assert_has_future_effect(&effects);
}

#[test]
fn load_for_a_guest_is_a_noop() {
    let env = env(SessionContext::new());
    let mut state = TransactionsState::new(HistoryScope::User, 5);

    let effects =
        TransactionsReducer::new().reduce(&mut state, TransactionsAction::Load { page: 1 }, &env);

    assert!(!state.loading);
    assert_no_effects(&effects);
}

#[test]
fn loaded_replaces_rows_and_meta() {
    let env = user_env();
    let mut state = TransactionsState::new(HistoryScope::Admin, 5);
    state.rows = vec![row("stale")];

    TransactionsReducer::new().reduce(
        &mut state,
        TransactionsAction::Loaded {
            rows: vec![row("t1"), row("t2")],
            meta: meta(7, 1, 2),
        },
        &env,
    );

    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.rows[0].id, "t1");
    assert_eq!(state.page.pages(), 2);
    assert!(!state.loading);
}

#[test]
fn load_failure_degrades_to_an_empty_table() {
    let env = user_env();
    let mut state = TransactionsState::new(HistoryScope::User, 5);
    state.rows = vec![row("t1")];
    state.loading = true;

    TransactionsReducer::new().reduce(
        &mut state,
        TransactionsAction::LoadFailed {
            message: "Failed to fetch transactions".to_string(),
        },
        &env,
    );

    assert!(state.rows.is_empty());
    assert!(!state.loading);
    assert_eq!(
        state.notice.unwrap().message,
        "Failed to fetch transactions"
    );
}

#[test]
fn page_navigation_is_bounded() {
    let env = user_env();
    let mut state = TransactionsState::new(HistoryScope::Admin, 5);
    TransactionsReducer::new().reduce(
        &mut state,
        TransactionsAction::Loaded {
            rows: vec![],
            meta: meta(12, 1, 3),
        },
        &env,
    );

    let effects = TransactionsReducer::new().reduce(&mut state, TransactionsAction::PrevPage, &env);
    assert_no_effects(&effects);

    let effects = TransactionsReducer::new().reduce(&mut state, TransactionsAction::NextPage, &env);
    assert_has_future_effect(&effects);
    assert_eq!(state.page.page(), 2);
}
