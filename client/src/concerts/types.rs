//! Core types for the concert list.

use crate::notice::Notice;
use crate::pagination::PageState;
use encore_api::types::{ConcertDto, ConcertId, ReservationId, ReservationStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which listing the store is scoped to.
///
/// The backend overloads the concert `maxSeats` field by scope: admin
/// listings carry the venue capacity, user listings carry the seats the
/// requesting user holds. The scope picks which domain field gets
/// populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListScope {
    /// Admin view: all concerts, capacity figures
    Admin,
    /// User view: concerts with the current user's reservation state
    User,
}

/// A concert as held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concert {
    /// Concert id
    pub id: ConcertId,
    /// Concert name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Venue capacity; populated by admin-scoped listings
    pub venue_capacity: Option<u32>,
    /// Seats the current user holds; populated by user-scoped listings
    pub my_reserved_seats: Option<u32>,
    /// The current user's reservation id, if any
    pub reservation_id: Option<ReservationId>,
    /// The current user's reservation status, if any
    pub reservation_status: Option<ReservationStatus>,
}

impl Concert {
    /// Map a wire concert into the domain model for the given scope.
    #[must_use]
    pub fn from_dto(dto: ConcertDto, scope: ListScope) -> Self {
        let (venue_capacity, my_reserved_seats) = match scope {
            ListScope::Admin => (Some(dto.max_seats), None),
            ListScope::User => (None, Some(dto.max_seats)),
        };
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            venue_capacity,
            my_reserved_seats,
            reservation_id: dto.reservation_id,
            reservation_status: dto.reservation_status,
        }
    }

    /// Whether the current user holds an active reservation.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.reservation_id.is_some()
            && self.reservation_status != Some(ReservationStatus::Cancelled)
    }

    /// Whether the current user's reservation was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.reservation_status == Some(ReservationStatus::Cancelled)
    }
}

/// Reservation fields captured before an optimistic patch, for rollback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationSnapshot {
    /// Reservation id before the patch
    pub reservation_id: Option<ReservationId>,
    /// Reservation status before the patch
    pub reservation_status: Option<ReservationStatus>,
    /// List generation the snapshot was taken against. A rollback applies
    /// only while the generation is unchanged; after a load the loaded
    /// values are authoritative.
    pub generation: u64,
}

/// State for the concerts reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcertsState {
    /// The held page of concerts
    pub concerts: Vec<Concert>,
    /// Pagination state
    pub page: PageState,
    /// Listing scope (fixed at store construction)
    pub scope: ListScope,
    /// True while a page fetch is in flight
    pub loading: bool,
    /// Per-concert in-flight reserve/cancel actions
    pub in_flight: HashMap<ConcertId, ReservationSnapshot>,
    /// Bumped on every `Loaded`; marks which list rollbacks apply to
    pub generation: u64,
    /// Transient notice for the views
    pub notice: Option<Notice>,
}

impl ConcertsState {
    /// Create an empty state for the given scope and page size.
    #[must_use]
    pub fn new(scope: ListScope, page_size: u32) -> Self {
        Self {
            concerts: Vec::new(),
            page: PageState::new(page_size),
            scope,
            loading: false,
            in_flight: HashMap::new(),
            generation: 0,
            notice: None,
        }
    }

    /// Find a concert by id.
    #[must_use]
    pub fn find(&self, id: &ConcertId) -> Option<&Concert> {
        self.concerts.iter().find(|c| &c.id == id)
    }

    /// Find a concert by id, mutably.
    pub fn find_mut(&mut self, id: &ConcertId) -> Option<&mut Concert> {
        self.concerts.iter_mut().find(|c| &c.id == id)
    }

    /// Whether an action is in flight for this concert.
    #[must_use]
    pub fn is_in_flight(&self, id: &ConcertId) -> bool {
        self.in_flight.contains_key(id)
    }
}
