use thiserror::Error;

/// Errors raised by clock-control operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Invalid time format: '{input}' (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimeFormat { input: String },
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;
