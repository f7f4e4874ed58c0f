//! Transient user-facing notices.
//!
//! Every failure in a feature store surfaces as a notice instead of a
//! fatal error; views render the current notice and the reducer schedules
//! its dismissal through an `Effect::Delay`.

use serde::{Deserialize, Serialize};

/// Severity of a notice, for view styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Confirmation of a completed action
    Info,
    /// A failed action or precondition
    Error,
}

/// A transient, auto-dismissing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Message text shown to the user
    pub message: String,
    /// Severity for styling
    pub severity: Severity,
}

impl Notice {
    /// Create an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}
