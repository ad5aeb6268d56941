//! Switching primitives for timer-driven pumps.
//!
//! Two pieces live here:
//! - [`DutySwitch`]: the on/off state machine shared by every timed pump
//! - [`DutyCycleTimer`]: the seam through which timer pumps obtain their
//!   on/off durations from a timing circuit, with [`Astable555`] as the
//!   stock implementation

pub mod error;
pub mod switch;
pub mod timer;

pub use error::{ControlError, ControlResult};
pub use switch::DutySwitch;
pub use timer::{Astable555, DutyCycleTimer};
