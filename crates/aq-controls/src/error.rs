//! Error types for switching and timer operations.

use aq_core::AqError;
use thiserror::Error;

/// Result type for control operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur while configuring switches or timers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// A duration that must be finite and non-negative was not.
    #[error("Invalid duration for {what}: {value} s")]
    InvalidDuration { what: &'static str, value: f64 },
}

impl From<AqError> for ControlError {
    fn from(e: AqError) -> Self {
        match e {
            AqError::NonFinite { what, value } | AqError::Negative { what, value } => {
                ControlError::InvalidDuration { what, value }
            }
        }
    }
}
