//! aq-chain: the ordered component chain water flows through.
//!
//! Provides:
//! - [`Chain`], an arena of components addressed by [`ComponentId`]
//! - [`ChainBuilder`], which assembles a chain from registry values and
//!   wires each container to the component before it
//!
//! # Example
//!
//! ```
//! use aq_chain::ChainBuilder;
//! use aq_components::{ComponentKind, ParamValue, ParamValues};
//!
//! let mut builder = ChainBuilder::new();
//! builder
//!     .add_kind(
//!         ComponentKind::Pump,
//!         ParamValues::new().with("outflow", ParamValue::Float(5.0)),
//!     )
//!     .unwrap();
//! builder
//!     .add_kind(
//!         ComponentKind::Container,
//!         ParamValues::new()
//!             .with("outflow", ParamValue::Float(5.0))
//!             .with("threshold", ParamValue::Integer(10))
//!             .with("start_content", ParamValue::Integer(0)),
//!     )
//!     .unwrap();
//! let chain = builder.build().unwrap();
//!
//! assert_eq!(chain.len(), 2);
//! ```
//!
//! [`ComponentId`]: aq_core::ComponentId

pub mod builder;
pub mod chain;
pub mod error;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::ChainBuilder;
pub use chain::Chain;
pub use error::{ChainError, ChainResult};
