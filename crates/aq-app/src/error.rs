//! Error types for the aq-app service layer.

/// Application error type that wraps errors from the backend crates
/// behind one interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Component error: {0}")]
    Component(String),

    #[error("Chain error: {0}")]
    Chain(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Series not found: {0}")]
    SeriesNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for aq-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<aq_components::ComponentError> for AppError {
    fn from(err: aq_components::ComponentError) -> Self {
        AppError::Component(err.to_string())
    }
}

impl From<aq_chain::ChainError> for AppError {
    fn from(err: aq_chain::ChainError) -> Self {
        AppError::Chain(err.to_string())
    }
}

impl From<aq_sim::SimError> for AppError {
    fn from(err: aq_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<aq_results::ResultsError> for AppError {
    fn from(err: aq_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
