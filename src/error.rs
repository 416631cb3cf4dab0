//! Error types for Barkyard
//!
//! Uses `thiserror` for library errors. Only malformed caller data lands
//! here; operational failures (duplicate ids, unknown ids, invalid
//! presence transitions) are part of normal control flow and are reported
//! through boolean returns instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Barkyard operations
pub type BarkyardResult<T> = Result<T, BarkyardError>;

/// Main error type for Barkyard operations
#[derive(Error, Debug)]
pub enum BarkyardError {
    /// Dog age failed validation
    #[error("age must be a positive number of years, got {age}")]
    InvalidAge { age: i32 },

    /// Dog weight failed validation
    #[error("weight must be a positive number of pounds, got {weight}")]
    InvalidWeight { weight: f64 },

    /// Email failed validation (needs '@' with a dotted domain)
    #[error("invalid email address '{email}'")]
    InvalidEmail { email: String },

    /// Phone failed validation
    #[error("invalid phone number '{phone}' (should be ###-###-####)")]
    InvalidPhone { phone: String },

    /// A search was invoked without a query string
    #[error("search query is missing")]
    MissingQuery,

    /// Configuration file did not parse
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
