//! Error types for simulation runs.

use aq_chain::ChainError;
use aq_components::ComponentError;
use thiserror::Error;

/// Errors encountered while running a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Component failed at t = {t_s} s: {source}")]
    Step {
        t_s: u32,
        #[source]
        source: ComponentError,
    },

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
}

pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_error_names_time() {
        let err = SimError::Step {
            t_s: 120,
            source: ComponentError::MissingPredecessor { kind: "Container" },
        };
        assert_eq!(
            err.to_string(),
            "Component failed at t = 120 s: Container has no predecessor to draw water from"
        );
    }
}
