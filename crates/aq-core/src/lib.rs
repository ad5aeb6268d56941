//! aq-core: stable foundation for aquaflow.
//!
//! Contains:
//! - units (uom SI types + constructors for liters, l/min, minutes, kΩ, µF)
//! - numeric (Real + finiteness and sign checks)
//! - ids (compact chain-position IDs)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AqError, AqResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
