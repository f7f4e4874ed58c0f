//! Read-only reservation audit history.
//!
//! Transactions are immutable records the backend appends on every
//! reserve/cancel; the client only pages through them. A failed fetch
//! degrades to an empty table with a notice - it never blocks the page.

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod store;
pub mod types;
#[cfg(test)]
mod tests;

pub use actions::TransactionsAction;
pub use environment::{
    ProductionTransactionsEnvironment, TransactionsApi, TransactionsEnvironment,
};
pub use reducer::TransactionsReducer;
pub use store::TransactionsStore;
pub use types::{HistoryScope, Transaction, TransactionsState};
