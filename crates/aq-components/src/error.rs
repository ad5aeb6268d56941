//! Error types for component construction and stepping.

use aq_controls::ControlError;
use aq_core::error::AqError;
use thiserror::Error;

use crate::catalog::ParamKind;

/// Errors that can occur while building or stepping components.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Invalid value for {what}: {value}")]
    InvalidValue { what: &'static str, value: f64 },

    #[error("{kind} has no predecessor to draw water from")]
    MissingPredecessor { kind: &'static str },

    #[error("Unknown component kind: {name}")]
    UnknownKind { name: String },

    #[error("{kind} is missing parameter '{name}'")]
    MissingParam {
        kind: &'static str,
        name: &'static str,
    },

    #[error("{kind} does not take parameter '{name}'")]
    UnknownParam { kind: &'static str, name: String },

    #[error("{kind} parameter '{name}' expects a {expected}")]
    WrongParamKind {
        kind: &'static str,
        name: &'static str,
        expected: ParamKind,
    },

    #[error("Timer error: {0}")]
    Timer(#[from] ControlError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<AqError> for ComponentError {
    fn from(e: AqError) -> Self {
        match e {
            AqError::NonFinite { what, value } | AqError::Negative { what, value } => {
                ComponentError::InvalidValue { what, value }
            }
        }
    }
}
