//! Actions for the dashboard reducer.

use encore_api::types::DashboardStats;
use serde::{Deserialize, Serialize};

/// Actions processed by the dashboard reducer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DashboardAction {
    /// Fetch the aggregate statistics.
    Load,

    /// The fetch settled successfully.
    Loaded {
        /// Fresh statistics
        stats: DashboardStats,
    },

    /// The fetch failed; the display degrades to zeros.
    LoadFailed {
        /// Error message for the notice
        message: String,
    },

    /// Clear the current notice.
    DismissNotice,
}
