//! Container component models.
//!
//! A container is any tank, basin or grow bed holding water. It fills from
//! the component before it in the chain and drains at its own outflow rule:
//!
//! ```text
//! volume += elapsed_min * (inflow - outflow)
//! ```
//!
//! The volume is never clamped. A container that drains faster than it
//! fills goes negative, which shows up in the results as a modelling error
//! rather than being hidden.

use aq_core::ComponentId;

use crate::catalog::{ComponentKind, ParamValue};
use crate::common::{check_rate, check_volume, volume_delta_l};
use crate::error::{ComponentError, ComponentResult};
use crate::traits::{FlowComponent, StateSample};

fn require_inflow(inflow_lpm: Option<f64>, kind: ComponentKind) -> ComponentResult<f64> {
    inflow_lpm.ok_or(ComponentError::MissingPredecessor { kind: kind.name() })
}

/// Container that always drains at its configured rate.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleContainer {
    /// Component this container fills from
    pub previous: ComponentId,
    /// Drain rate (l/min)
    pub outflow_lpm: f64,
    /// Volume at t=0 (l)
    pub start_content_l: f64,
    volume_l: f64,
}

impl SimpleContainer {
    pub fn new(previous: ComponentId, outflow_lpm: f64, start_content_l: f64) -> ComponentResult<Self> {
        let start_content_l = check_volume(start_content_l, "start content")?;
        Ok(Self {
            previous,
            outflow_lpm: check_rate(outflow_lpm, "container outflow")?,
            start_content_l,
            volume_l: start_content_l,
        })
    }

    pub fn volume_l(&self) -> f64 {
        self.volume_l
    }
}

impl FlowComponent for SimpleContainer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::SimpleContainer
    }

    fn outflow_lpm(&self) -> f64 {
        self.outflow_lpm
    }

    fn state(&self) -> StateSample {
        StateSample::Volume(self.volume_l)
    }

    fn previous(&self) -> Option<ComponentId> {
        Some(self.previous)
    }

    fn step(&mut self, elapsed_s: f64, inflow_lpm: Option<f64>) -> ComponentResult<()> {
        let inflow = require_inflow(inflow_lpm, self.kind())?;
        self.volume_l += volume_delta_l(elapsed_s, inflow, self.outflow_lpm);
        Ok(())
    }

    fn params(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("previous", ParamValue::Component(self.previous)),
            ("outflow", ParamValue::Float(self.outflow_lpm)),
            ("start_content", ParamValue::Float(self.start_content_l)),
        ]
    }
}

/// Container whose outlet only runs once the volume reaches a threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    /// Component this container fills from
    pub previous: ComponentId,
    /// Drain rate once the threshold is reached (l/min)
    pub outflow_lpm: f64,
    /// Volume at which draining starts (l)
    pub threshold_l: f64,
    /// Volume at t=0 (l)
    pub start_content_l: f64,
    volume_l: f64,
}

impl Container {
    pub fn new(
        previous: ComponentId,
        outflow_lpm: f64,
        threshold_l: f64,
        start_content_l: f64,
    ) -> ComponentResult<Self> {
        let start_content_l = check_volume(start_content_l, "start content")?;
        Ok(Self {
            previous,
            outflow_lpm: check_rate(outflow_lpm, "container outflow")?,
            threshold_l: check_volume(threshold_l, "threshold")?,
            start_content_l,
            volume_l: start_content_l,
        })
    }

    pub fn volume_l(&self) -> f64 {
        self.volume_l
    }
}

impl FlowComponent for Container {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Container
    }

    fn outflow_lpm(&self) -> f64 {
        if self.volume_l >= self.threshold_l {
            self.outflow_lpm
        } else {
            0.0
        }
    }

    fn state(&self) -> StateSample {
        StateSample::Volume(self.volume_l)
    }

    fn previous(&self) -> Option<ComponentId> {
        Some(self.previous)
    }

    fn step(&mut self, elapsed_s: f64, inflow_lpm: Option<f64>) -> ComponentResult<()> {
        let inflow = require_inflow(inflow_lpm, self.kind())?;
        let outflow = self.outflow_lpm();
        self.volume_l += volume_delta_l(elapsed_s, inflow, outflow);
        Ok(())
    }

    fn params(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("previous", ParamValue::Component(self.previous)),
            ("outflow", ParamValue::Float(self.outflow_lpm)),
            ("start_content", ParamValue::Float(self.start_content_l)),
            ("threshold", ParamValue::Float(self.threshold_l)),
        ]
    }
}

/// Flood-and-drain bed emptied by a siphon.
///
/// Nothing drains until the volume reaches the threshold. From then on the
/// siphon keeps pulling at the full rate, whatever the level, until the bed
/// is empty; only then does it break and the bed refills.
#[derive(Clone, Debug, PartialEq)]
pub struct FloodDrainContainer {
    /// Component this container fills from
    pub previous: ComponentId,
    /// Siphon drain rate (l/min)
    pub outflow_lpm: f64,
    /// Volume at which the siphon starts (l)
    pub threshold_l: f64,
    /// Volume at t=0 (l)
    pub start_content_l: f64,
    volume_l: f64,
    flooding: bool,
}

impl FloodDrainContainer {
    pub fn new(
        previous: ComponentId,
        outflow_lpm: f64,
        threshold_l: f64,
        start_content_l: f64,
    ) -> ComponentResult<Self> {
        let start_content_l = check_volume(start_content_l, "start content")?;
        Ok(Self {
            previous,
            outflow_lpm: check_rate(outflow_lpm, "container outflow")?,
            threshold_l: check_volume(threshold_l, "threshold")?,
            start_content_l,
            volume_l: start_content_l,
            flooding: false,
        })
    }

    pub fn volume_l(&self) -> f64 {
        self.volume_l
    }

    /// Whether the siphon was running as of the last step.
    pub fn is_flooding(&self) -> bool {
        self.flooding
    }

    fn siphon_running(&self) -> bool {
        (self.flooding && self.volume_l > 0.0) || self.volume_l >= self.threshold_l
    }
}

impl FlowComponent for FloodDrainContainer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::FloodDrainContainer
    }

    fn outflow_lpm(&self) -> f64 {
        if self.siphon_running() {
            self.outflow_lpm
        } else {
            0.0
        }
    }

    fn state(&self) -> StateSample {
        StateSample::Volume(self.volume_l)
    }

    fn previous(&self) -> Option<ComponentId> {
        Some(self.previous)
    }

    /// The latch is stored here, not in `outflow_lpm`: the rate this step
    /// drains at and the latch it leaves behind come from one evaluation.
    fn step(&mut self, elapsed_s: f64, inflow_lpm: Option<f64>) -> ComponentResult<()> {
        let inflow = require_inflow(inflow_lpm, self.kind())?;
        let running = self.siphon_running();
        if running != self.flooding {
            tracing::debug!(volume_l = self.volume_l, flooding = running, "siphon latch changed");
        }
        self.flooding = running;

        let outflow = if running { self.outflow_lpm } else { 0.0 };
        self.volume_l += volume_delta_l(elapsed_s, inflow, outflow);
        Ok(())
    }

    fn params(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("previous", ParamValue::Component(self.previous)),
            ("outflow", ParamValue::Float(self.outflow_lpm)),
            ("start_content", ParamValue::Float(self.start_content_l)),
            ("threshold", ParamValue::Float(self.threshold_l)),
        ]
    }
}
