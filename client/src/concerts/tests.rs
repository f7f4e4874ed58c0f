//! Unit tests for the reservation reconciliation logic.
//!
//! These drive the reducer directly with a mock API in the environment, so
//! every effect stays un-executed and assertions can distinguish "patched
//! locally" from "would have called the network".

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use crate::concerts::actions::ConcertsAction;
use crate::concerts::environment::ProductionConcertsEnvironment;
use crate::concerts::reducer::ConcertsReducer;
use crate::concerts::types::{Concert, ConcertsState, ListScope};
use crate::config::ClientConfig;
use crate::mocks::MockConcertsApi;
use crate::notice::Severity;
use crate::session::context::SessionContext;
use encore_api::types::{
    AuthToken, ConcertId, PageMeta, ReservationId, ReservationStatus, Role, UserId,
};
use encore_core::reducer::Reducer;
use encore_testing::reducer_test::assertions::{
    assert_has_delay_effect, assert_has_future_effect, assert_no_effects,
};
use std::sync::Arc;

fn test_config() -> ClientConfig {
    ClientConfig::new("http://test/api/v1")
}

fn user_context() -> SessionContext {
    SessionContext::with_identity(AuthToken::new("tok"), Role::User, Some(UserId::new("u1")))
}

fn user_env(config: ClientConfig) -> (Arc<MockConcertsApi>, ProductionConcertsEnvironment) {
    let api = Arc::new(MockConcertsApi::new());
    let env = ProductionConcertsEnvironment::new(Arc::clone(&api) as _, user_context(), config);
    (api, env)
}

fn guest_env() -> ProductionConcertsEnvironment {
    ProductionConcertsEnvironment::new(
        Arc::new(MockConcertsApi::new()),
        SessionContext::new(),
        test_config(),
    )
}

fn concert(id: &str, name: &str) -> Concert {
    Concert {
        id: ConcertId::new(id),
        name: name.to_string(),
        description: None,
        venue_capacity: None,
        my_reserved_seats: Some(0),
        reservation_id: None,
        reservation_status: None,
    }
}

fn confirmed(mut c: Concert, reservation: &str) -> Concert {
    c.reservation_id = Some(ReservationId::new(reservation));
    c.reservation_status = Some(ReservationStatus::Confirmed);
    c
}

fn cancelled(mut c: Concert) -> Concert {
    c.reservation_id = None;
    c.reservation_status = Some(ReservationStatus::Cancelled);
    c
}

fn meta(total: u64, page: u32, limit: u32, pages: u32) -> PageMeta {
    PageMeta {
        total,
        page,
        limit,
        pages,
    }
}

/// State as if one page had been loaded.
fn loaded_state(concerts: Vec<Concert>) -> ConcertsState {
    let mut state = ConcertsState::new(ListScope::User, 5);
    let total = concerts.len() as u64;
    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Loaded {
            concerts,
            meta: meta(total, 1, 5, 1),
        },
        &guest_env(),
    );
    state
}

fn id(raw: &str) -> ConcertId {
    ConcertId::new(raw)
}

// ════════════════════════════════════════════════════════════════════
// Load / Loaded
// ════════════════════════════════════════════════════════════════════

#[test]
fn loaded_replaces_the_held_list_wholesale() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![
        confirmed(concert("c1", "Old"), "r-stale"),
        concert("c2", "Also old"),
    ]);
    let generation_before = state.generation;

    let fresh = vec![concert("c9", "New")];
    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Loaded {
            concerts: fresh.clone(),
            meta: meta(1, 1, 5, 1),
        },
        &env,
    );

    // No stale per-entity patches bleed into the new page.
    assert_eq!(state.concerts, fresh);
    assert_eq!(state.generation, generation_before + 1);
    assert!(!state.loading);
}

#[test]
fn load_produces_a_fetch_effect_for_an_authenticated_user() {
    let (_, env) = user_env(test_config());
    let mut state = ConcertsState::new(ListScope::User, 5);

    let effects = ConcertsReducer::new().reduce(&mut state, ConcertsAction::Load { page: 1 }, &env);

    assert!(state.loading);
    assert_has_future_effect(&effects);
}

#[test]
fn load_for_a_guest_is_a_noop() {
    let env = guest_env();
    let mut state = ConcertsState::new(ListScope::User, 5);

    let effects = ConcertsReducer::new().reduce(&mut state, ConcertsAction::Load { page: 1 }, &env);

    assert!(!state.loading);
    assert_no_effects(&effects);
}

#[test]
fn load_failed_surfaces_the_message_and_stops_loading() {
    let (_, env) = user_env(test_config());
    let mut state = ConcertsState::new(ListScope::User, 5);
    state.loading = true;

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::LoadFailed {
            message: "Failed to fetch concerts".to_string(),
        },
        &env,
    );

    assert!(!state.loading);
    let notice = state.notice.expect("notice should be set");
    assert_eq!(notice.message, "Failed to fetch concerts");
    assert_eq!(notice.severity, Severity::Error);
    assert_has_delay_effect(&effects);
}

// ════════════════════════════════════════════════════════════════════
// Reserve
// ════════════════════════════════════════════════════════════════════

#[test]
fn reserve_applies_the_optimistic_patch_and_snapshots_the_prior_state() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );

    let c1 = state.find(&id("c1")).unwrap();
    assert_eq!(c1.reservation_status, Some(ReservationStatus::Confirmed));
    assert_eq!(c1.reservation_id, None); // id arrives on settle

    let snapshot = state.in_flight.get(&id("c1")).expect("snapshot captured");
    assert_eq!(snapshot.reservation_id, None);
    assert_eq!(snapshot.reservation_status, None);
    assert_eq!(snapshot.generation, state.generation);

    assert_has_future_effect(&effects);
}

#[test]
fn reserve_on_a_confirmed_concert_is_an_idempotent_noop() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![confirmed(concert("c1", "Summer Festival"), "r1")]);
    let before = state.clone();

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );

    assert_no_effects(&effects);
    assert_eq!(state, before);
}

#[test]
fn reserve_without_a_session_fails_locally_as_unauthorized() {
    let env = guest_env();
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);
    let concerts_before = state.concerts.clone();

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );

    assert_eq!(state.concerts, concerts_before);
    assert!(state.in_flight.is_empty());
    assert_eq!(state.notice.unwrap().message, "Unauthorized");
    // Only the notice dismissal is scheduled - no network call.
    assert_has_delay_effect(&effects);
    assert!(!effects
        .iter()
        .any(|e| matches!(e, encore_core::effect::Effect::Future(_))));
}

#[test]
fn reserve_on_a_cancelled_reservation_is_terminal_by_default() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![cancelled(concert("c1", "Summer Festival"))]);
    let concerts_before = state.concerts.clone();

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );

    assert_eq!(state.concerts, concerts_before);
    assert!(state.in_flight.is_empty());
    assert_eq!(
        state.notice.unwrap().message,
        "Cancelled reservations cannot be reserved again"
    );
    assert!(!effects
        .iter()
        .any(|e| matches!(e, encore_core::effect::Effect::Future(_))));
}

#[test]
fn reserve_on_a_cancelled_reservation_proceeds_when_rebook_is_allowed() {
    let (_, env) = user_env(test_config().with_rebook_after_cancel(true));
    let mut state = loaded_state(vec![cancelled(concert("c1", "Summer Festival"))]);

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );

    assert_has_future_effect(&effects);
    let c1 = state.find(&id("c1")).unwrap();
    assert_eq!(c1.reservation_status, Some(ReservationStatus::Confirmed));
}

#[test]
fn reserve_success_patches_exactly_the_target_entity() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![
        concert("c1", "Summer Festival"),
        confirmed(concert("c2", "Acoustic Night"), "r2"),
        concert("c3", "Jazz Evening"),
    ]);
    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );
    let siblings_before: Vec<Concert> = state
        .concerts
        .iter()
        .filter(|c| c.id != id("c1"))
        .cloned()
        .collect();

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::ReserveSucceeded {
            concert_id: id("c1"),
            reservation_id: ReservationId::new("r1"),
        },
        &env,
    );

    let c1 = state.find(&id("c1")).unwrap();
    assert_eq!(c1.reservation_id, Some(ReservationId::new("r1")));
    assert_eq!(c1.reservation_status, Some(ReservationStatus::Confirmed));

    let siblings_after: Vec<Concert> = state
        .concerts
        .iter()
        .filter(|c| c.id != id("c1"))
        .cloned()
        .collect();
    assert_eq!(siblings_before, siblings_after);
    assert!(state.in_flight.is_empty());
    assert_eq!(state.notice.unwrap().message, "Reservation successful!");
}

#[test]
fn reserve_failure_rolls_back_and_surfaces_the_server_message() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);
    let concerts_before = state.concerts.clone();

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );
    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::ReserveFailed {
            concert_id: id("c1"),
            message: "Concert is full".to_string(),
        },
        &env,
    );

    assert_eq!(state.concerts, concerts_before);
    assert!(state.in_flight.is_empty());
    assert_eq!(state.notice.unwrap().message, "Concert is full");
    assert_has_delay_effect(&effects);
}

#[test]
fn second_reserve_for_the_same_concert_while_in_flight_is_a_noop() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![
        concert("c1", "Summer Festival"),
        concert("c2", "Acoustic Night"),
    ]);

    let first = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );
    assert_has_future_effect(&first);

    let second = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );
    assert_no_effects(&second);
    assert_eq!(state.in_flight.len(), 1);

    // A different concert is not blocked by c1's in-flight action.
    let other = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c2"),
        },
        &env,
    );
    assert_has_future_effect(&other);
    assert_eq!(state.in_flight.len(), 2);
}

// ════════════════════════════════════════════════════════════════════
// Load racing an in-flight action
// ════════════════════════════════════════════════════════════════════

#[test]
fn settle_after_a_load_patches_the_new_list_by_id_match() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );

    // A page refresh lands while the reserve is in flight.
    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Loaded {
            concerts: vec![concert("c1", "Summer Festival"), concert("c2", "New")],
            meta: meta(2, 1, 5, 1),
        },
        &env,
    );

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::ReserveSucceeded {
            concert_id: id("c1"),
            reservation_id: ReservationId::new("r1"),
        },
        &env,
    );

    let c1 = state.find(&id("c1")).unwrap();
    assert_eq!(c1.reservation_id, Some(ReservationId::new("r1")));
    assert_eq!(c1.reservation_status, Some(ReservationStatus::Confirmed));
}

#[test]
fn settle_for_a_paged_away_concert_is_a_silent_noop() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );

    // Page 2 no longer contains c1.
    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Loaded {
            concerts: vec![concert("c7", "Elsewhere")],
            meta: meta(6, 2, 5, 2),
        },
        &env,
    );

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::ReserveSucceeded {
            concert_id: id("c1"),
            reservation_id: ReservationId::new("r1"),
        },
        &env,
    );

    assert!(state.find(&id("c1")).is_none());
    assert!(state.in_flight.is_empty());
}

#[test]
fn rollback_after_a_superseding_load_keeps_the_loaded_values() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Reserve {
            concert_id: id("c1"),
        },
        &env,
    );

    // The refresh reports the server's own view of c1.
    let server_c1 = confirmed(concert("c1", "Summer Festival"), "r-server");
    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Loaded {
            concerts: vec![server_c1.clone()],
            meta: meta(1, 1, 5, 1),
        },
        &env,
    );

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::ReserveFailed {
            concert_id: id("c1"),
            message: "Concert is full".to_string(),
        },
        &env,
    );

    // The stale snapshot must not clobber the authoritative load.
    assert_eq!(state.find(&id("c1")).unwrap(), &server_c1);
    assert!(state.in_flight.is_empty());
}

// ════════════════════════════════════════════════════════════════════
// Cancel reservation
// ════════════════════════════════════════════════════════════════════

#[test]
fn cancel_reservation_applies_the_optimistic_patch() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![confirmed(concert("c1", "Summer Festival"), "r1")]);

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::CancelReservation {
            concert_id: id("c1"),
        },
        &env,
    );

    let c1 = state.find(&id("c1")).unwrap();
    assert_eq!(c1.reservation_id, None);
    assert_eq!(c1.reservation_status, Some(ReservationStatus::Cancelled));
    assert_has_future_effect(&effects);

    let snapshot = state.in_flight.get(&id("c1")).unwrap();
    assert_eq!(snapshot.reservation_id, Some(ReservationId::new("r1")));
}

#[test]
fn cancel_reservation_without_a_reservation_is_a_noop() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);
    let before = state.clone();

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::CancelReservation {
            concert_id: id("c1"),
        },
        &env,
    );

    assert_no_effects(&effects);
    assert_eq!(state, before);
}

#[test]
fn cancel_failure_restores_the_confirmed_reservation() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![confirmed(concert("c1", "Summer Festival"), "r1")]);
    let concerts_before = state.concerts.clone();

    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::CancelReservation {
            concert_id: id("c1"),
        },
        &env,
    );
    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::CancelFailed {
            concert_id: id("c1"),
            message: "Failed to cancel".to_string(),
        },
        &env,
    );

    assert_eq!(state.concerts, concerts_before);
    assert_eq!(state.notice.unwrap().message, "Failed to cancel");
}

// ════════════════════════════════════════════════════════════════════
// Admin operations
// ════════════════════════════════════════════════════════════════════

#[test]
fn cancel_concert_never_patches_locally() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);
    let concerts_before = state.concerts.clone();

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::CancelConcert {
            concert_id: id("c1"),
        },
        &env,
    );

    assert_has_future_effect(&effects);
    assert_eq!(state.concerts, concerts_before);
    assert!(state.in_flight.is_empty());
}

#[test]
fn concert_cancelled_triggers_an_authoritative_reload() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![concert("c1", "Summer Festival")]);

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::ConcertCancelled {
            concert_id: id("c1"),
        },
        &env,
    );

    assert!(state.loading);
    assert_has_future_effect(&effects);
    assert_has_delay_effect(&effects);
}

#[test]
fn concert_created_reloads_and_announces() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![]);

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::ConcertCreated {
            name: "Jazz Evening".to_string(),
        },
        &env,
    );

    assert_eq!(state.notice.unwrap().message, "Created \"Jazz Evening\"");
    assert_has_future_effect(&effects);
}

// ════════════════════════════════════════════════════════════════════
// Pagination
// ════════════════════════════════════════════════════════════════════

#[test]
fn page_navigation_fetches_only_when_the_page_changes() {
    let (_, env) = user_env(test_config());
    let mut state = ConcertsState::new(ListScope::User, 5);
    ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::Loaded {
            concerts: vec![],
            meta: meta(12, 1, 5, 3),
        },
        &env,
    );

    let effects = ConcertsReducer::new().reduce(&mut state, ConcertsAction::PrevPage, &env);
    assert_no_effects(&effects); // already on page 1

    let effects = ConcertsReducer::new().reduce(&mut state, ConcertsAction::NextPage, &env);
    assert_has_future_effect(&effects);
    assert_eq!(state.page.page(), 2);

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::GoToPage { page: 2 },
        &env,
    );
    assert_no_effects(&effects); // same page

    let effects = ConcertsReducer::new().reduce(
        &mut state,
        ConcertsAction::GoToPage { page: 9 },
        &env,
    );
    assert_no_effects(&effects); // out of bounds
}

#[test]
fn dismiss_notice_clears_it() {
    let (_, env) = user_env(test_config());
    let mut state = loaded_state(vec![]);
    state.notice = Some(crate::notice::Notice::info("Reservation successful!"));

    ConcertsReducer::new().reduce(&mut state, ConcertsAction::DismissNotice, &env);

    assert!(state.notice.is_none());
}
