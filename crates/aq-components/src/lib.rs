//! aq-components: hydraulic component library for aquaponics chains.
//!
//! Provides models for the stages water passes through:
//! - Water sources and pumps (always-on, timed, and 555-timer driven)
//! - Containers (plain, threshold-gated, and flood/drain siphon beds)
//!
//! Every model implements [`FlowComponent`]. [`Component`] closes the set
//! into one enum so chains can store any mix of them, and
//! [`catalog`] describes each kind's constructor parameters so callers can
//! build components from named values.
//!
//! # Example
//!
//! ```
//! use aq_components::{Container, FlowComponent, Pump};
//! use aq_core::ComponentId;
//!
//! let pump = Pump::new(5.0).unwrap();
//! let mut tank = Container::new(ComponentId::from_index(0), 5.0, 10.0, 0.0).unwrap();
//!
//! tank.step(60.0, Some(pump.outflow_lpm())).unwrap();
//! assert_eq!(tank.state().value(), Some(5.0));
//! ```

pub mod catalog;
pub mod common;
pub mod component;
pub mod container;
pub mod error;
pub mod pump;
pub mod source;
pub mod traits;

// Re-exports
pub use catalog::{ComponentKind, ParamKind, ParamSpec, ParamValue, ParamValues};
pub use component::Component;
pub use container::{Container, FloodDrainContainer, SimpleContainer};
pub use error::{ComponentError, ComponentResult};
pub use pump::{Pump, TimedPump, TimerPump};
pub use source::WaterSource;
pub use traits::{FlowComponent, StateSample};
