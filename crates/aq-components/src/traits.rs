//! Core traits for component models.

use aq_core::ComponentId;
use aq_core::units::{VolumeRate, lpm};

use crate::catalog::{ComponentKind, ParamValue};
use crate::error::ComponentResult;

/// Externally observable state of a component at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateSample {
    /// The component carries no state (water sources).
    Empty,
    /// Pump switch position.
    OnOff(bool),
    /// Water held, in liters.
    Volume(f64),
}

impl StateSample {
    /// Numeric form: `None` for empty, `1`/`0` for on/off, liters for volume.
    pub fn value(&self) -> Option<f64> {
        match self {
            StateSample::Empty => None,
            StateSample::OnOff(on) => Some(if *on { 1.0 } else { 0.0 }),
            StateSample::Volume(v) => Some(*v),
        }
    }
}

/// Uniform contract of every stage in a chain.
///
/// The simulation calls [`step`](FlowComponent::step) once per tick on every
/// component, last component first. A container's inflow is its
/// predecessor's outflow *before* that predecessor steps, which the reverse
/// order guarantees.
pub trait FlowComponent {
    /// Registry kind of this component.
    fn kind(&self) -> ComponentKind;

    /// Current rate (l/min) at which water leaves this component.
    ///
    /// Pure: querying never changes state.
    fn outflow_lpm(&self) -> f64;

    /// Current state, without side effects.
    fn state(&self) -> StateSample;

    /// Chain position this component draws its inflow from, if any.
    fn previous(&self) -> Option<ComponentId> {
        None
    }

    /// Advance internal state by `elapsed_s` seconds.
    ///
    /// `inflow_lpm` is the predecessor's current outflow, or `None` when
    /// there is no predecessor. Components that need one fail with
    /// [`ComponentError::MissingPredecessor`](crate::ComponentError::MissingPredecessor).
    fn step(&mut self, elapsed_s: f64, inflow_lpm: Option<f64>) -> ComponentResult<()>;

    /// Configured parameters as (name, value) pairs, in registry order.
    fn params(&self) -> Vec<(&'static str, ParamValue)>;

    /// Outflow as a unit-carrying quantity.
    fn outflow(&self) -> VolumeRate {
        lpm(self.outflow_lpm())
    }
}
