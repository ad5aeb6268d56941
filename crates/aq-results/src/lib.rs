//! aq-results: packaging and export of simulation output.

pub mod export;
pub mod labels;
pub mod package;
pub mod types;

pub use export::{from_json, to_csv, to_json};
pub use labels::series_titles;
pub use package::package;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record has {record} series but {expected} were expected")]
    SeriesMismatch { record: usize, expected: usize },
}
