//! Reducer for the concert list and its reservation reconciliation.

use crate::concerts::actions::ConcertsAction;
use crate::concerts::environment::{ConcertsEnvironment, ProductionConcertsEnvironment};
use crate::concerts::types::{Concert, ConcertsState, ListScope, ReservationSnapshot};
use crate::notice::Notice;
use encore_api::types::{ConcertId, CreateConcertRequest, ReservationStatus};
use encore_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

type Effects = SmallVec<[Effect<ConcertsAction>; 4]>;

/// Reducer managing the held concert list.
///
/// Every settled server response writes only the reservation fields of
/// its one matching entity; two responses are never merged.
#[derive(Clone)]
pub struct ConcertsReducer;

impl ConcertsReducer {
    /// Create a new concerts reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Schedule notice auto-dismissal.
    fn dismiss_delay(env: &ProductionConcertsEnvironment) -> Effect<ConcertsAction> {
        Effect::Delay {
            duration: env.config().notice_ttl,
            action: Box::new(ConcertsAction::DismissNotice),
        }
    }

    /// Set a notice and schedule its auto-dismissal.
    fn notify(
        state: &mut ConcertsState,
        notice: Notice,
        env: &ProductionConcertsEnvironment,
    ) -> Effects {
        state.notice = Some(notice);
        smallvec![Self::dismiss_delay(env)]
    }

    /// Begin a page fetch. Preconditions are checked here, before any
    /// network call: a guest store stays empty, and a user-scoped fetch
    /// without a known user id surfaces a notice.
    fn start_load(
        state: &mut ConcertsState,
        env: &ProductionConcertsEnvironment,
        page: u32,
    ) -> Effects {
        let session = env.session().snapshot();
        let Some(token) = session.token else {
            state.loading = false;
            return smallvec![Effect::None];
        };

        let user = match state.scope {
            ListScope::Admin => None,
            ListScope::User => match session.user_id {
                Some(user_id) => Some(user_id),
                None => {
                    state.loading = false;
                    return Self::notify(state, Notice::error("User not found"), env);
                },
            },
        };

        state.loading = true;
        let api = env.api();
        let scope = state.scope;
        let limit = state.page.limit();

        smallvec![Effect::future(async move {
            Some(match api.list(page, limit, user.as_ref(), &token).await {
                Ok(fetched) => ConcertsAction::Loaded {
                    concerts: fetched
                        .data
                        .into_iter()
                        .map(|dto| Concert::from_dto(dto, scope))
                        .collect(),
                    meta: fetched.meta,
                },
                Err(e) => ConcertsAction::LoadFailed {
                    message: e.user_message(),
                },
            })
        })]
    }

    /// Roll an entity back to its pre-action snapshot.
    ///
    /// Applies only while the snapshot's generation matches: once a load
    /// replaced the list, the loaded values are authoritative and the
    /// rollback is a no-op.
    fn roll_back(state: &mut ConcertsState, concert_id: &ConcertId) {
        let Some(snapshot) = state.in_flight.remove(concert_id) else {
            return;
        };
        if snapshot.generation != state.generation {
            tracing::debug!(concert = %concert_id, "Rollback superseded by a load, skipping");
            return;
        }
        if let Some(concert) = state.find_mut(concert_id) {
            concert.reservation_id = snapshot.reservation_id;
            concert.reservation_status = snapshot.reservation_status;
        }
    }
}

impl Default for ConcertsReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for ConcertsReducer {
    type State = ConcertsState;
    type Action = ConcertsAction;
    type Environment = ProductionConcertsEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per action keeps the flow readable
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects {
        match action {
            ConcertsAction::Load { page } => Self::start_load(state, env, page),

            ConcertsAction::Loaded { concerts, meta } => {
                // Wholesale replacement: nothing from the previous page
                // bleeds into the new one.
                state.concerts = concerts;
                state.page.apply_meta(&meta);
                state.generation += 1;
                state.loading = false;
                smallvec![Effect::None]
            },

            ConcertsAction::LoadFailed { message } => {
                state.loading = false;
                Self::notify(state, Notice::error(message), env)
            },

            ConcertsAction::Reserve { concert_id } => {
                let session = env.session().snapshot();
                let Some((token, user_id)) = session.authenticated() else {
                    return Self::notify(state, Notice::error("Unauthorized"), env);
                };

                if state.is_in_flight(&concert_id) {
                    return smallvec![Effect::None];
                }
                let Some(existing) = state.find(&concert_id) else {
                    return smallvec![Effect::None];
                };
                if existing.is_reserved() {
                    // Idempotent guard: already confirmed, nothing to do.
                    return smallvec![Effect::None];
                }
                if existing.is_cancelled() && !env.config().allow_rebook_after_cancel {
                    return Self::notify(
                        state,
                        Notice::error("Cancelled reservations cannot be reserved again"),
                        env,
                    );
                }

                let snapshot = ReservationSnapshot {
                    reservation_id: existing.reservation_id.clone(),
                    reservation_status: existing.reservation_status,
                    generation: state.generation,
                };
                state.in_flight.insert(concert_id.clone(), snapshot);

                // Optimistic patch; the reservation id arrives on settle.
                if let Some(concert) = state.find_mut(&concert_id) {
                    concert.reservation_status = Some(ReservationStatus::Confirmed);
                }

                let api = env.api();
                smallvec![Effect::future(async move {
                    Some(match api.reserve(&user_id, &concert_id, &token).await {
                        Ok(created) => ConcertsAction::ReserveSucceeded {
                            concert_id,
                            reservation_id: created.id,
                        },
                        Err(e) => ConcertsAction::ReserveFailed {
                            concert_id,
                            message: e.user_message(),
                        },
                    })
                })]
            },

            ConcertsAction::ReserveSucceeded {
                concert_id,
                reservation_id,
            } => {
                state.in_flight.remove(&concert_id);
                // Patch by id-match against whatever list is held now; a
                // concert that was paged away is silently skipped.
                if let Some(concert) = state.find_mut(&concert_id) {
                    concert.reservation_id = Some(reservation_id);
                    concert.reservation_status = Some(ReservationStatus::Confirmed);
                } else {
                    tracing::debug!(concert = %concert_id, "Reserved concert no longer held, patch skipped");
                }
                Self::notify(state, Notice::info("Reservation successful!"), env)
            },

            ConcertsAction::ReserveFailed {
                concert_id,
                message,
            } => {
                Self::roll_back(state, &concert_id);
                Self::notify(state, Notice::error(message), env)
            },

            ConcertsAction::CancelReservation { concert_id } => {
                let session = env.session().snapshot();
                let Some((token, user_id)) = session.authenticated() else {
                    return Self::notify(state, Notice::error("Unauthorized"), env);
                };

                if state.is_in_flight(&concert_id) {
                    return smallvec![Effect::None];
                }
                let Some(existing) = state.find(&concert_id) else {
                    return smallvec![Effect::None];
                };
                if existing.reservation_id.is_none() {
                    // Nothing to cancel; the views never offer this.
                    return smallvec![Effect::None];
                }

                let snapshot = ReservationSnapshot {
                    reservation_id: existing.reservation_id.clone(),
                    reservation_status: existing.reservation_status,
                    generation: state.generation,
                };
                state.in_flight.insert(concert_id.clone(), snapshot);

                // Optimistic patch.
                if let Some(concert) = state.find_mut(&concert_id) {
                    concert.reservation_id = None;
                    concert.reservation_status = Some(ReservationStatus::Cancelled);
                }

                let api = env.api();
                smallvec![Effect::future(async move {
                    Some(
                        match api.cancel_reservation(&user_id, &concert_id, &token).await {
                            Ok(()) => ConcertsAction::CancelSucceeded { concert_id },
                            Err(e) => ConcertsAction::CancelFailed {
                                concert_id,
                                message: e.user_message(),
                            },
                        },
                    )
                })]
            },

            ConcertsAction::CancelSucceeded { concert_id } => {
                state.in_flight.remove(&concert_id);
                if let Some(concert) = state.find_mut(&concert_id) {
                    concert.reservation_id = None;
                    concert.reservation_status = Some(ReservationStatus::Cancelled);
                }
                Self::notify(state, Notice::info("Reservation cancelled!"), env)
            },

            ConcertsAction::CancelFailed {
                concert_id,
                message,
            } => {
                Self::roll_back(state, &concert_id);
                Self::notify(state, Notice::error(message), env)
            },

            ConcertsAction::CancelConcert { concert_id } => {
                let session = env.session().snapshot();
                let Some(token) = session.token else {
                    return Self::notify(state, Notice::error("Unauthorized"), env);
                };

                let api = env.api();
                smallvec![Effect::future(async move {
                    Some(match api.cancel_concert(&concert_id, &token).await {
                        Ok(_) => ConcertsAction::ConcertCancelled { concert_id },
                        Err(e) => ConcertsAction::CancelConcertFailed {
                            message: e.user_message(),
                        },
                    })
                })]
            },

            ConcertsAction::ConcertCancelled { concert_id } => {
                tracing::info!(concert = %concert_id, "Concert cancelled, reloading page");
                // No local patch: cancellation affects aggregate stats and
                // other users' views, so the reload is authoritative.
                state.notice = Some(Notice::info("Concert cancelled"));
                let page = state.page.page();
                let mut effects = Self::start_load(state, env, page);
                effects.push(Self::dismiss_delay(env));
                effects
            },

            ConcertsAction::CancelConcertFailed { message } => {
                Self::notify(state, Notice::error(message), env)
            },

            ConcertsAction::CreateConcert {
                name,
                description,
                max_seats,
            } => {
                let session = env.session().snapshot();
                let Some(token) = session.token else {
                    return Self::notify(state, Notice::error("Unauthorized"), env);
                };

                let api = env.api();
                smallvec![Effect::future(async move {
                    let request = CreateConcertRequest {
                        name: name.clone(),
                        description,
                        max_seats,
                    };
                    Some(match api.create(&request, &token).await {
                        Ok(_) => ConcertsAction::ConcertCreated { name },
                        Err(e) => ConcertsAction::CreateConcertFailed {
                            message: e.user_message(),
                        },
                    })
                })]
            },

            ConcertsAction::ConcertCreated { name } => {
                state.notice = Some(Notice::info(format!("Created \"{name}\"")));
                let page = state.page.page();
                let mut effects = Self::start_load(state, env, page);
                effects.push(Self::dismiss_delay(env));
                effects
            },

            ConcertsAction::CreateConcertFailed { message } => {
                Self::notify(state, Notice::error(message), env)
            },

            ConcertsAction::NextPage => {
                if state.page.next() {
                    let page = state.page.page();
                    Self::start_load(state, env, page)
                } else {
                    smallvec![Effect::None]
                }
            },

            ConcertsAction::PrevPage => {
                if state.page.prev() {
                    let page = state.page.page();
                    Self::start_load(state, env, page)
                } else {
                    smallvec![Effect::None]
                }
            },

            ConcertsAction::GoToPage { page } => {
                if state.page.go_to_page(page) {
                    Self::start_load(state, env, page)
                } else {
                    smallvec![Effect::None]
                }
            },

            ConcertsAction::DismissNotice => {
                state.notice = None;
                smallvec![Effect::None]
            },
        }
    }
}
