//! Custom error types for Passbook
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. Only withdrawals can fail in the account
//! core; the remaining variants cover configuration, audit and export I/O.

use thiserror::Error;

/// The main error type for Passbook operations
#[derive(Error, Debug)]
pub enum PassbookError {
    /// Withdrawal requested with a non-positive amount
    #[error("Invalid withdrawal amount: {amount:.2}")]
    InvalidAmount { amount: f64 },

    /// Withdrawal requested for more than the current balance
    #[error("Insufficient balance: requested ${requested:.2}, available ${available:.2}")]
    InsufficientBalance { requested: f64, available: f64 },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PassbookError {
    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }

    /// Check if this is an insufficient balance error
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }
}

impl From<std::io::Error> for PassbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PassbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Passbook operations
pub type PassbookResult<T> = Result<T, PassbookError>;
