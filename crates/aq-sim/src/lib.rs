//! aq-sim: discrete-time simulation of component chains.
//!
//! Provides:
//! - [`SimOptions`] for the step size and run length
//! - [`run`] and [`run_with_progress`] to drive a [`Chain`](aq_chain::Chain)
//! - [`SimRecord`] holding the sampled time series

pub mod error;
pub mod sim;

pub use error::{SimError, SimResult};
pub use sim::{
    MAX_DURATION_H, MAX_TIME_STEP_S, SimOptions, SimProgress, SimRecord, run, run_with_options,
    run_with_progress,
};
