//! Mock API implementations.

use crate::concerts::environment::ConcertsApi;
use crate::dashboard::environment::DashboardApi;
use crate::session::environment::AuthApi;
use crate::transactions::environment::TransactionsApi;
use async_trait::async_trait;
use encore_api::error::ApiError;
use encore_api::types::{
    AuthResponse, AuthToken, ConcertDto, ConcertId, CreateConcertRequest, DashboardStats,
    LoginRequest, MeResponse, Paginated, RegisterRequest, ReservationCreated, TransactionDto,
    TransactionScope, UserId,
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// FIFO queue of canned responses.
///
/// An exhausted queue yields a loud error so a test that issues an
/// unexpected call fails instead of hanging.
struct ResponseQueue<T>(Mutex<VecDeque<T>>);

impl<T> ResponseQueue<T> {
    fn push(&self, item: T) {
        self.lock().push_back(item);
    }

    fn pop(&self) -> Option<T> {
        self.lock().pop_front()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<T>> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T> Default for ResponseQueue<T> {
    fn default() -> Self {
        Self(Mutex::new(VecDeque::new()))
    }
}

fn exhausted(endpoint: &str) -> ApiError {
    ApiError::Network(format!("no mock response queued for {endpoint}"))
}

/// Call log shared by the mocks.
struct CallLog<T>(Mutex<Vec<T>>);

impl<T> CallLog<T> {
    fn record(&self, call: T) {
        self.lock().push(call);
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T: Clone> CallLog<T> {
    fn calls(&self) -> Vec<T> {
        self.lock().clone()
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self(Mutex::new(Vec::new()))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Auth
// ═══════════════════════════════════════════════════════════════════════

/// Mock auth endpoints.
#[derive(Default)]
pub struct MockAuthApi {
    login_results: ResponseQueue<Result<AuthResponse, ApiError>>,
    register_results: ResponseQueue<Result<AuthResponse, ApiError>>,
    me_results: ResponseQueue<Result<MeResponse, ApiError>>,
    me_calls: CallLog<AuthToken>,
}

impl MockAuthApi {
    /// Create a mock with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a login result.
    pub fn push_login(&self, result: Result<AuthResponse, ApiError>) {
        self.login_results.push(result);
    }

    /// Queue a register result.
    pub fn push_register(&self, result: Result<AuthResponse, ApiError>) {
        self.register_results.push(result);
    }

    /// Queue a `/me` result.
    pub fn push_me(&self, result: Result<MeResponse, ApiError>) {
        self.me_results.push(result);
    }

    /// Tokens `/me` was called with, in order.
    #[must_use]
    pub fn me_calls(&self) -> Vec<AuthToken> {
        self.me_calls.calls()
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.login_results.pop().unwrap_or_else(|| Err(exhausted("login")))
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.register_results
            .pop()
            .unwrap_or_else(|| Err(exhausted("register")))
    }

    async fn me(&self, token: &AuthToken) -> Result<MeResponse, ApiError> {
        self.me_calls.record(token.clone());
        self.me_results.pop().unwrap_or_else(|| Err(exhausted("me")))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Concerts
// ═══════════════════════════════════════════════════════════════════════

/// Mock concert endpoints.
#[derive(Default)]
pub struct MockConcertsApi {
    list_results: ResponseQueue<Result<Paginated<ConcertDto>, ApiError>>,
    reserve_results: ResponseQueue<Result<ReservationCreated, ApiError>>,
    cancel_reservation_results: ResponseQueue<Result<(), ApiError>>,
    cancel_concert_results: ResponseQueue<Result<ConcertDto, ApiError>>,
    create_results: ResponseQueue<Result<ConcertDto, ApiError>>,
    list_calls: CallLog<(u32, u32, Option<UserId>)>,
    reserve_calls: CallLog<(UserId, ConcertId)>,
    cancel_reservation_calls: CallLog<(UserId, ConcertId)>,
    cancel_concert_calls: CallLog<ConcertId>,
    create_calls: CallLog<CreateConcertRequest>,
}

impl MockConcertsApi {
    /// Create a mock with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a listing result.
    pub fn push_list(&self, result: Result<Paginated<ConcertDto>, ApiError>) {
        self.list_results.push(result);
    }

    /// Queue a reserve result.
    pub fn push_reserve(&self, result: Result<ReservationCreated, ApiError>) {
        self.reserve_results.push(result);
    }

    /// Queue a reservation-cancel result.
    pub fn push_cancel_reservation(&self, result: Result<(), ApiError>) {
        self.cancel_reservation_results.push(result);
    }

    /// Queue an admin concert-cancel result.
    pub fn push_cancel_concert(&self, result: Result<ConcertDto, ApiError>) {
        self.cancel_concert_results.push(result);
    }

    /// Queue a create-concert result.
    pub fn push_create(&self, result: Result<ConcertDto, ApiError>) {
        self.create_results.push(result);
    }

    /// Number of listing calls issued.
    #[must_use]
    pub fn list_call_count(&self) -> usize {
        self.list_calls.len()
    }

    /// Number of reserve calls issued.
    #[must_use]
    pub fn reserve_call_count(&self) -> usize {
        self.reserve_calls.len()
    }

    /// Reserve calls issued, in order.
    #[must_use]
    pub fn reserve_calls(&self) -> Vec<(UserId, ConcertId)> {
        self.reserve_calls.calls()
    }

    /// Number of reservation-cancel calls issued.
    #[must_use]
    pub fn cancel_reservation_call_count(&self) -> usize {
        self.cancel_reservation_calls.len()
    }

    /// Concert-cancel calls issued, in order.
    #[must_use]
    pub fn cancel_concert_calls(&self) -> Vec<ConcertId> {
        self.cancel_concert_calls.calls()
    }

    /// Create-concert calls issued, in order.
    #[must_use]
    pub fn create_calls(&self) -> Vec<CreateConcertRequest> {
        self.create_calls.calls()
    }
}

#[async_trait]
impl ConcertsApi for MockConcertsApi {
    async fn list(
        &self,
        page: u32,
        limit: u32,
        user: Option<&UserId>,
        _token: &AuthToken,
    ) -> Result<Paginated<ConcertDto>, ApiError> {
        self.list_calls.record((page, limit, user.cloned()));
        self.list_results
            .pop()
            .unwrap_or_else(|| Err(exhausted("concerts/list")))
    }

    async fn reserve(
        &self,
        user: &UserId,
        concert: &ConcertId,
        _token: &AuthToken,
    ) -> Result<ReservationCreated, ApiError> {
        self.reserve_calls.record((user.clone(), concert.clone()));
        self.reserve_results
            .pop()
            .unwrap_or_else(|| Err(exhausted("reserve")))
    }

    async fn cancel_reservation(
        &self,
        user: &UserId,
        concert: &ConcertId,
        _token: &AuthToken,
    ) -> Result<(), ApiError> {
        self.cancel_reservation_calls
            .record((user.clone(), concert.clone()));
        self.cancel_reservation_results
            .pop()
            .unwrap_or_else(|| Err(exhausted("cancel reservation")))
    }

    async fn cancel_concert(
        &self,
        concert: &ConcertId,
        _token: &AuthToken,
    ) -> Result<ConcertDto, ApiError> {
        self.cancel_concert_calls.record(concert.clone());
        self.cancel_concert_results
            .pop()
            .unwrap_or_else(|| Err(exhausted("concerts/cancel")))
    }

    async fn create(
        &self,
        request: &CreateConcertRequest,
        _token: &AuthToken,
    ) -> Result<ConcertDto, ApiError> {
        self.create_calls.record(request.clone());
        self.create_results
            .pop()
            .unwrap_or_else(|| Err(exhausted("concerts/create")))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Transactions
// ═══════════════════════════════════════════════════════════════════════

/// Mock transaction history endpoint.
#[derive(Default)]
pub struct MockTransactionsApi {
    list_results: ResponseQueue<Result<Paginated<TransactionDto>, ApiError>>,
    list_calls: CallLog<(TransactionScope, u32, u32)>,
}

impl MockTransactionsApi {
    /// Create a mock with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a listing result.
    pub fn push_list(&self, result: Result<Paginated<TransactionDto>, ApiError>) {
        self.list_results.push(result);
    }

    /// Listing calls issued, in order.
    #[must_use]
    pub fn list_calls(&self) -> Vec<(TransactionScope, u32, u32)> {
        self.list_calls.calls()
    }
}

#[async_trait]
impl TransactionsApi for MockTransactionsApi {
    async fn list(
        &self,
        scope: &TransactionScope,
        page: u32,
        limit: u32,
        _token: &AuthToken,
    ) -> Result<Paginated<TransactionDto>, ApiError> {
        self.list_calls.record((scope.clone(), page, limit));
        self.list_results
            .pop()
            .unwrap_or_else(|| Err(exhausted("transactions/list")))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Dashboard
// ═══════════════════════════════════════════════════════════════════════

/// Mock dashboard stats endpoint.
#[derive(Default)]
pub struct MockDashboardApi {
    stats_results: ResponseQueue<Result<DashboardStats, ApiError>>,
}

impl MockDashboardApi {
    /// Create a mock with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a stats result.
    pub fn push_stats(&self, result: Result<DashboardStats, ApiError>) {
        self.stats_results.push(result);
    }
}

#[async_trait]
impl DashboardApi for MockDashboardApi {
    async fn stats(&self, _token: &AuthToken) -> Result<DashboardStats, ApiError> {
        self.stats_results
            .pop()
            .unwrap_or_else(|| Err(exhausted("reserve/dashboard")))
    }
}
