//! Types for the transaction history.

use crate::notice::Notice;
use crate::pagination::PageState;
use chrono::{DateTime, Utc};
use encore_api::types::{ReservationId, ReservationStatus, TransactionDto};
use serde::{Deserialize, Serialize};

/// Which history the store shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryScope {
    /// All transactions (admin view)
    Admin,
    /// The current user's transactions
    User,
}

/// An immutable audit record of a reservation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id
    pub id: String,
    /// Reservation this transaction belongs to
    pub reservation_id: ReservationId,
    /// Name of the user who acted
    pub username: String,
    /// Name of the concert acted on
    pub concert_name: String,
    /// What happened
    pub action: ReservationStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<TransactionDto> for Transaction {
    fn from(dto: TransactionDto) -> Self {
        Self {
            id: dto.id,
            reservation_id: dto.reservation_id,
            username: dto.username,
            concert_name: dto.concert_name,
            action: dto.action,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// State for the transactions reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsState {
    /// The held page of transactions
    pub rows: Vec<Transaction>,
    /// Pagination state
    pub page: PageState,
    /// History scope (fixed at store construction)
    pub scope: HistoryScope,
    /// True while a page fetch is in flight
    pub loading: bool,
    /// Transient notice for the views
    pub notice: Option<Notice>,
}

impl TransactionsState {
    /// Create an empty state for the given scope and page size.
    #[must_use]
    pub fn new(scope: HistoryScope, page_size: u32) -> Self {
        Self {
            rows: Vec::new(),
            page: PageState::new(page_size),
            scope,
            loading: false,
            notice: None,
        }
    }
}
