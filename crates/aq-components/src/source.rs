//! Static water source.

use crate::catalog::{ComponentKind, ParamValue};
use crate::common::check_rate;
use crate::error::ComponentResult;
use crate::traits::{FlowComponent, StateSample};

/// Spring, mains tap or any other source with a constant flow.
///
/// Has no contents and no switch, so its state is always empty.
#[derive(Clone, Debug, PartialEq)]
pub struct WaterSource {
    /// Constant flow rate (l/min)
    pub outflow_lpm: f64,
}

impl WaterSource {
    pub fn new(outflow_lpm: f64) -> ComponentResult<Self> {
        Ok(Self {
            outflow_lpm: check_rate(outflow_lpm, "water source outflow")?,
        })
    }
}

impl FlowComponent for WaterSource {
    fn kind(&self) -> ComponentKind {
        ComponentKind::WaterSource
    }

    fn outflow_lpm(&self) -> f64 {
        self.outflow_lpm
    }

    fn state(&self) -> StateSample {
        StateSample::Empty
    }

    fn step(&mut self, _elapsed_s: f64, _inflow_lpm: Option<f64>) -> ComponentResult<()> {
        Ok(())
    }

    fn params(&self) -> Vec<(&'static str, ParamValue)> {
        vec![("outflow", ParamValue::Float(self.outflow_lpm))]
    }
}
