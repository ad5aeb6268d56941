//! Shared application service layer for aquaflow.
//!
//! Front ends describe a chain as component specs, then hand it to the run
//! service. This crate owns the parsing, assembly, execution, packaging and
//! summary steps in between.

pub mod chain_service;
pub mod error;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use chain_service::{ComponentSpec, assemble, parse_spec};
pub use error::{AppError, AppResult};
pub use query::{ComponentSummary, RunSummary, extract_series, get_run_summary};
pub use run_service::{ExportFormat, RunOutput, export, run, run_with_progress};
