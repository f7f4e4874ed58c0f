//! Actions for the transactions reducer.

use crate::transactions::types::Transaction;
use encore_api::types::PageMeta;
use serde::{Deserialize, Serialize};

/// Actions processed by the transactions reducer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransactionsAction {
    /// Fetch a page of transactions.
    Load {
        /// Page to fetch (1-based)
        page: u32,
    },

    /// A page fetch settled successfully.
    Loaded {
        /// The fetched page of transactions
        rows: Vec<Transaction>,
        /// Fresh pagination metadata
        meta: PageMeta,
    },

    /// A page fetch failed; the table degrades to empty.
    LoadFailed {
        /// Error message for the notice
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
