//! Wire types for the reservation backend.
//!
//! These mirror the backend's JSON shapes (camelCase keys, Mongo-style
//! `_id` fields) and are shared with the client feature crates, which map
//! them into their own domain state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// ID Types
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for a concert (server-issued, opaque).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcertId(pub String);

impl ConcertId {
    /// Wrap a raw id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConcertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a reservation (server-issued, opaque).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub String);

impl ReservationId {
    /// Wrap a raw id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user (server-issued, opaque).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Wrap a raw id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque bearer token issued by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(pub String);

impl AuthToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string (used to build the `Authorization` header).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Domain enums
// ═══════════════════════════════════════════════════════════════════════

/// Role attached to a session.
///
/// `Guest` never appears on the wire - it is the client-side state of an
/// unauthenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Unauthenticated (client-side only)
    #[default]
    Guest,
    /// Regular attendee
    User,
    /// Concert administrator
    Admin,
}

impl Role {
    /// Role name as the backend spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// Status of a user's reservation against a concert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Reservation is active
    Confirmed,
    /// Reservation was cancelled
    Cancelled,
}

// ═══════════════════════════════════════════════════════════════════════
// Pagination
// ═══════════════════════════════════════════════════════════════════════

/// Pagination metadata returned alongside every list endpoint.
///
/// Invariant (server-side): `pages == ceil(total / limit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of items across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total number of pages
    pub pages: u32,
}

/// A page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on this page
    pub data: Vec<T>,
    /// Pagination metadata
    pub meta: PageMeta,
}

// ═══════════════════════════════════════════════════════════════════════
// Concerts
// ═══════════════════════════════════════════════════════════════════════

/// A concert as the backend serializes it.
///
/// `max_seats` is role-scoped on the backend: admin-scoped listings carry
/// the venue capacity, user-scoped listings carry the seats reserved by
/// the requesting user. The client maps it into two explicitly named
/// fields when building its domain state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcertDto {
    /// Concert id
    #[serde(rename = "_id")]
    pub id: ConcertId,
    /// Concert name
    pub name: String,
    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Role-scoped seat figure (see type docs)
    #[serde(rename = "maxSeats")]
    pub max_seats: u32,
    /// The requesting user's reservation id, if any
    #[serde(rename = "reservationId", default)]
    pub reservation_id: Option<ReservationId>,
    /// The requesting user's reservation status, if any
    #[serde(rename = "reservationStatus", default)]
    pub reservation_status: Option<ReservationStatus>,
}

/// Payload for `POST /concerts/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConcertRequest {
    /// Concert name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Venue capacity
    #[serde(rename = "maxSeats")]
    pub max_seats: u32,
}

/// Body of a successful `POST /reserve/{userId}/{concertId}`.
///
/// The backend returns the full reservation record; only the id matters to
/// the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationCreated {
    /// Id of the created reservation
    #[serde(rename = "_id")]
    pub id: ReservationId,
}

// ═══════════════════════════════════════════════════════════════════════
// Dashboard & transactions
// ═══════════════════════════════════════════════════════════════════════

/// Aggregate statistics for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    /// Seats across all concerts
    #[serde(rename = "totalSeats")]
    pub total_seats: u64,
    /// Currently confirmed reservations
    #[serde(rename = "reservedCount")]
    pub reserved_count: u64,
    /// Cancelled reservations
    #[serde(rename = "cancelledCount")]
    pub cancelled_count: u64,
}

/// Immutable audit record of a reservation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDto {
    /// Transaction id
    #[serde(rename = "_id")]
    pub id: String,
    /// Reservation this transaction belongs to
    #[serde(rename = "reservationId")]
    pub reservation_id: ReservationId,
    /// Name of the user who acted
    pub username: String,
    /// Name of the concert acted on
    #[serde(rename = "concertName")]
    pub concert_name: String,
    /// What happened
    pub action: ReservationStatus,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Which transaction history to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionScope {
    /// All transactions (`admin=true`)
    Admin,
    /// A single user's transactions (`userId=...`)
    User(UserId),
}

// ═══════════════════════════════════════════════════════════════════════
// Auth
// ═══════════════════════════════════════════════════════════════════════

/// Payload for `POST /user/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Payload for `POST /user/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Requested role
    pub role: Role,
}

/// Body of a successful login or register.
///
/// Some backend variants omit `role` and `_id` from the login response, in
/// which case the client resolves identity through `/user/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent calls
    pub access_token: AuthToken,
    /// Role, when the backend includes it
    #[serde(default)]
    pub role: Option<Role>,
    /// User id, when the backend includes it
    #[serde(rename = "_id", default)]
    pub user_id: Option<UserId>,
}

/// Body of `GET /user/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    /// User id
    pub id: UserId,
    /// Display name (some variants omit it)
    #[serde(default)]
    pub name: Option<String>,
    /// Account email
    pub email: String,
    /// Verified role - ground truth for the session
    pub role: Role,
}
