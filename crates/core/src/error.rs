//! Facade error model.

use thiserror::Error;

/// Result type used across the facade.
pub type LoggingResult<T> = Result<T, LoggingError>;

/// Facade-level error.
///
/// Only configuration parsing can fail. Field construction, registry swaps and
/// context propagation are total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// Level text did not match any known level name.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}

impl LoggingError {
    pub fn unknown_level(input: impl Into<String>) -> Self {
        Self::UnknownLevel(input.into())
    }
}
