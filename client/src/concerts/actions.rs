//! Actions for the concerts reducer.

use crate::concerts::types::Concert;
use encore_api::types::{ConcertId, PageMeta, ReservationId};
use serde::{Deserialize, Serialize};

/// Actions processed by the concerts reducer.
///
/// User intents come from views; the settled variants (`Loaded`,
/// `ReserveSucceeded`, ...) are fed back by effects when their network
/// call settles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConcertsAction {
    /// Fetch a page of concerts.
    Load {
        /// Page to fetch (1-based)
        page: u32,
    },

    /// A page fetch settled successfully. Replaces the held list
    /// wholesale - the authoritative sync point.
    Loaded {
        /// The fetched page of concerts
        concerts: Vec<Concert>,
        /// Fresh pagination metadata
        meta: PageMeta,
    },

    /// A page fetch failed.
    LoadFailed {
        /// Error message for the notice
        message: String,
    },

    /// Reserve a seat on a concert (user).
    Reserve {
        /// Target concert
        concert_id: ConcertId,
    },

    /// A reserve call settled successfully.
    ReserveSucceeded {
        /// Target concert
        concert_id: ConcertId,
        /// Id of the created reservation
        reservation_id: ReservationId,
    },

    /// A reserve call failed; the optimistic patch is rolled back.
    ReserveFailed {
        /// Target concert
        concert_id: ConcertId,
        /// Server error message
        message: String,
    },

    /// Cancel the current user's reservation on a concert.
    CancelReservation {
        /// Target concert
        concert_id: ConcertId,
    },

    /// A reservation-cancel call settled successfully.
    CancelSucceeded {
        /// Target concert
        concert_id: ConcertId,
    },

    /// A reservation-cancel call failed; the optimistic patch is rolled
    /// back.
    CancelFailed {
        /// Target concert
        concert_id: ConcertId,
        /// Server error message
        message: String,
    },

    /// Soft-cancel a concert (admin). Never patches locally - success
    /// triggers a full reload.
    CancelConcert {
        /// Target concert
        concert_id: ConcertId,
    },

    /// An admin concert-cancel settled successfully.
    ConcertCancelled {
        /// Target concert
        concert_id: ConcertId,
    },

    /// An admin concert-cancel failed.
    CancelConcertFailed {
        /// Server error message
        message: String,
    },

    /// Create a concert (admin).
    CreateConcert {
        /// Concert name
        name: String,
        /// Free-text description
        description: String,
        /// Venue capacity
        max_seats: u32,
    },

    /// A create-concert call settled successfully; triggers a reload.
    ConcertCreated {
        /// Name of the created concert
        name: String,
    },

    /// A create-concert call failed.
    CreateConcertFailed {
        /// Server error message
        message: String,
    },

    /// Step to the next page (bounded).
    NextPage,

    /// Step to the previous page (bounded).
    PrevPage,

    /// Jump to a specific page (bounded).
    GoToPage {
        /// Target page (1-based)
        page: u32,
    },

    /// Clear the current notice.
    DismissNotice,
}
