//! Mock providers for testing.
//!
//! In-memory implementations of the feature environment traits. Each mock
//! API serves queued responses in FIFO order and records the calls it
//! receives, so tests can assert both state transitions and that guarded
//! actions issued no network call at all.

pub mod api;
pub mod storage;

pub use api::{MockAuthApi, MockConcertsApi, MockDashboardApi, MockTransactionsApi};
pub use storage::MemorySessionStorage;
