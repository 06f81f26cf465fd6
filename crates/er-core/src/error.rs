//! Core error type.
//!
//! Sub-crates keep their own error enums and wrap `CoreError` as one variant
//! via `#[from]`, so parse failures of the shared enums propagate with `?`.

use thiserror::Error;

/// Errors produced while interpreting core domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unrecognized emergency type {0:?}: expected \"medical\" or \"fire\"")]
    InvalidEmergencyType(String),

    #[error("unrecognized severity {0:?}: expected \"high\", \"medium\", \"low\" or 1-3")]
    InvalidSeverity(String),

    #[error("unrecognized capacity {0:?}: expected \"high\", \"medium\" or \"low\"")]
    InvalidCapacity(String),
}

/// Shorthand result type for `er-core`.
pub type CoreResult<T> = Result<T, CoreError>;
