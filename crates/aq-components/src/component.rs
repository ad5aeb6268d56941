//! Closed set of component models.

use aq_core::ComponentId;

use crate::catalog::{ComponentKind, ParamValue};
use crate::container::{Container, FloodDrainContainer, SimpleContainer};
use crate::error::ComponentResult;
use crate::pump::{Pump, TimedPump, TimerPump};
use crate::source::WaterSource;
use crate::traits::{FlowComponent, StateSample};

/// Any component that can sit in a chain.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    WaterSource(WaterSource),
    Pump(Pump),
    TimedPump(TimedPump),
    TimerPump(TimerPump),
    SimpleContainer(SimpleContainer),
    Container(Container),
    FloodDrain(FloodDrainContainer),
}

impl Component {
    fn inner(&self) -> &dyn FlowComponent {
        match self {
            Component::WaterSource(c) => c,
            Component::Pump(c) => c,
            Component::TimedPump(c) => c,
            Component::TimerPump(c) => c,
            Component::SimpleContainer(c) => c,
            Component::Container(c) => c,
            Component::FloodDrain(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn FlowComponent {
        match self {
            Component::WaterSource(c) => c,
            Component::Pump(c) => c,
            Component::TimedPump(c) => c,
            Component::TimerPump(c) => c,
            Component::SimpleContainer(c) => c,
            Component::Container(c) => c,
            Component::FloodDrain(c) => c,
        }
    }
}

impl FlowComponent for Component {
    fn kind(&self) -> ComponentKind {
        self.inner().kind()
    }

    fn outflow_lpm(&self) -> f64 {
        self.inner().outflow_lpm()
    }

    fn state(&self) -> StateSample {
        self.inner().state()
    }

    fn previous(&self) -> Option<ComponentId> {
        self.inner().previous()
    }

    fn step(&mut self, elapsed_s: f64, inflow_lpm: Option<f64>) -> ComponentResult<()> {
        self.inner_mut().step(elapsed_s, inflow_lpm)
    }

    fn params(&self) -> Vec<(&'static str, ParamValue)> {
        self.inner().params()
    }
}

impl From<WaterSource> for Component {
    fn from(c: WaterSource) -> Self {
        Component::WaterSource(c)
    }
}

impl From<Pump> for Component {
    fn from(c: Pump) -> Self {
        Component::Pump(c)
    }
}

impl From<TimedPump> for Component {
    fn from(c: TimedPump) -> Self {
        Component::TimedPump(c)
    }
}

impl From<TimerPump> for Component {
    fn from(c: TimerPump) -> Self {
        Component::TimerPump(c)
    }
}

impl From<SimpleContainer> for Component {
    fn from(c: SimpleContainer) -> Self {
        Component::SimpleContainer(c)
    }
}

impl From<Container> for Component {
    fn from(c: Container) -> Self {
        Component::Container(c)
    }
}

impl From<FloodDrainContainer> for Component {
    fn from(c: FloodDrainContainer) -> Self {
        Component::FloodDrain(c)
    }
}
