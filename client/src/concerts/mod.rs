//! The concert list and its reservation state reconciliation.
//!
//! This is the core of the client: a paginated list of concerts where each
//! entry carries the current user's reservation state, kept consistent
//! with the backend across optimistic updates and concurrent actions.
//!
//! # Reconciliation policy
//!
//! - `Loaded` replaces the held list wholesale and is the authoritative
//!   sync point; a generation counter marks each load.
//! - `Reserve`/`CancelReservation` patch their entity optimistically
//!   (snapshotting the prior reservation fields), then settle: success
//!   re-patches by id-match, failure rolls the snapshot back - unless a
//!   load superseded the patch, in which case the loaded values stand.
//! - A settling action writes only the reservation fields of its one
//!   entity; everything else keeps its last-loaded values. An id that was
//!   paged away makes the patch a silent no-op.
//! - Admin `CancelConcert` never patches locally: it triggers a full
//!   reload, because cancellation affects aggregate stats and other
//!   users' views.
//!
//! # Per-entity in-flight guard
//!
//! One action per concert at a time; different concerts may be in flight
//! concurrently. Each entity's patch touches only its own fields, so
//! concurrent settles cannot conflict. The HTTP layer's request timeout
//! guarantees every in-flight entry eventually settles.
//!
//! # Client-observed state machine per concert
//!
//! ```text
//! None ──reserve──► Confirmed ──cancel──► Cancelled
//!                       ▲                     │
//!                       └──── reserve ────────┘  (only with allow_rebook_after_cancel)
//! ```

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod store;
pub mod types;
#[cfg(test)]
mod tests;

pub use actions::ConcertsAction;
pub use environment::{ConcertsApi, ConcertsEnvironment, ProductionConcertsEnvironment};
pub use reducer::ConcertsReducer;
pub use store::ConcertsStore;
pub use types::{Concert, ConcertsState, ListScope, ReservationSnapshot};
