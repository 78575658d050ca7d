//! Error types for the host side of the calculator
//!
//! The core never fails; these errors only come from the terminal, the
//! command line and output encoding.

use thiserror::Error;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can occur outside the pure core
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or stdout I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A label that does not match any keypad button
    #[error("Unknown keypad button: {label:?}")]
    UnknownTrigger {
        /// The rejected label
        label: String,
    },

    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Create an unknown-trigger error
    #[must_use]
    pub fn unknown_trigger(label: impl Into<String>) -> Self {
        Self::UnknownTrigger {
            label: label.into(),
        }
    }
}
