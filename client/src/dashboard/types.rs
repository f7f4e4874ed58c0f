//! Types for the admin dashboard.

use crate::notice::Notice;
use encore_api::types::DashboardStats;
use serde::{Deserialize, Serialize};

/// State for the dashboard reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardState {
    /// Aggregate statistics (zeros until loaded, and after a failed load)
    pub stats: DashboardStats,
    /// True while a fetch is in flight
    pub loading: bool,
    /// Transient notice for the views
    pub notice: Option<Notice>,
}
