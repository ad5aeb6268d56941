//! Registry of component kinds and their constructor parameters.
//!
//! The catalogue is descriptive: it tells a caller which named values each
//! kind needs, so chains can be assembled from forms, command lines or any
//! other generic input. [`ComponentKind::build`] then turns those values into
//! a typed component. Nothing here takes part in the simulation itself.

use core::fmt;
use core::str::FromStr;

use aq_controls::DutyCycleTimer;
use aq_core::ComponentId;

use crate::component::Component;
use crate::container::{Container, FloodDrainContainer, SimpleContainer};
use crate::error::{ComponentError, ComponentResult};
use crate::pump::{Pump, TimedPump, TimerPump};
use crate::source::WaterSource;

/// Semantic type of a constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Reference to the previous component in the chain.
    Component,
    Integer,
    Float,
    Text,
}

impl ParamKind {
    pub fn label(self) -> &'static str {
        match self {
            ParamKind::Component => "Model Component Parameter",
            ParamKind::Integer => "Integer Parameter",
            ParamKind::Float => "Float Parameter",
            ParamKind::Text => "Text Parameter",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One constructor parameter of a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub label: &'static str,
}

const fn param(name: &'static str, kind: ParamKind, label: &'static str) -> ParamSpec {
    ParamSpec { name, kind, label }
}

const OUTFLOW: ParamSpec = param("outflow", ParamKind::Float, "outflow (l/min)");
const PREVIOUS: ParamSpec = param("previous", ParamKind::Component, "previous");
const START_CONTENT: ParamSpec = param("start_content", ParamKind::Integer, "start content (l)");
const THRESHOLD: ParamSpec = param("threshold", ParamKind::Integer, "dump threshold (l)");

const SOURCE_PARAMS: [ParamSpec; 1] = [OUTFLOW];

const TIMED_PUMP_PARAMS: [ParamSpec; 3] = [
    OUTFLOW,
    param("ontime", ParamKind::Float, "on time (min)"),
    param("offtime", ParamKind::Float, "off time (min)"),
];

const TIMER_PUMP_PARAMS: [ParamSpec; 4] = [
    OUTFLOW,
    param("r1", ParamKind::Float, "Resistor 1 value (KOhm)"),
    param("r2", ParamKind::Float, "Resistor 2 value (KOhm)"),
    param("c", ParamKind::Integer, "The capacitor value (uF)"),
];

const SIMPLE_CONTAINER_PARAMS: [ParamSpec; 3] = [PREVIOUS, OUTFLOW, START_CONTENT];

const CONTAINER_PARAMS: [ParamSpec; 4] = [PREVIOUS, OUTFLOW, START_CONTENT, THRESHOLD];

/// Every kind of component a chain can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Container,
    FloodDrainContainer,
    Pump,
    TimedPump,
    Timed555Pump,
    InvTimed555Pump,
    WaterSource,
    SimpleContainer,
}

impl ComponentKind {
    /// All kinds, in registry order.
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Container,
        ComponentKind::FloodDrainContainer,
        ComponentKind::Pump,
        ComponentKind::TimedPump,
        ComponentKind::Timed555Pump,
        ComponentKind::InvTimed555Pump,
        ComponentKind::WaterSource,
        ComponentKind::SimpleContainer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Container => "Container",
            ComponentKind::FloodDrainContainer => "FloodDrainContainer",
            ComponentKind::Pump => "Pump",
            ComponentKind::TimedPump => "TimedPump",
            ComponentKind::Timed555Pump => "Timed555Pump",
            ComponentKind::InvTimed555Pump => "InvTimed555Pump",
            ComponentKind::WaterSource => "WaterSource",
            ComponentKind::SimpleContainer => "SimpleContainer",
        }
    }

    /// Constructor parameters, in the order a form should present them.
    pub fn params(self) -> &'static [ParamSpec] {
        match self {
            ComponentKind::Pump | ComponentKind::WaterSource => &SOURCE_PARAMS,
            ComponentKind::TimedPump => &TIMED_PUMP_PARAMS,
            ComponentKind::Timed555Pump | ComponentKind::InvTimed555Pump => &TIMER_PUMP_PARAMS,
            ComponentKind::SimpleContainer => &SIMPLE_CONTAINER_PARAMS,
            ComponentKind::Container | ComponentKind::FloodDrainContainer => &CONTAINER_PARAMS,
        }
    }

    pub fn param(self, name: &str) -> Option<&'static ParamSpec> {
        self.params().iter().find(|p| p.name == name)
    }

    /// Whether this kind draws from a predecessor and so cannot head a chain.
    pub fn needs_predecessor(self) -> bool {
        self.params().iter().any(|p| p.kind == ParamKind::Component)
    }

    /// Pumps report an on/off state.
    pub fn is_pump(self) -> bool {
        matches!(
            self,
            ComponentKind::Pump
                | ComponentKind::TimedPump
                | ComponentKind::Timed555Pump
                | ComponentKind::InvTimed555Pump
        )
    }

    /// Containers report a volume.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ComponentKind::SimpleContainer
                | ComponentKind::Container
                | ComponentKind::FloodDrainContainer
        )
    }

    /// Build a component of this kind from named values.
    ///
    /// Every declared parameter must be present. Integer and float
    /// parameters take either numeric value; a value of any other kind, and
    /// any name the kind does not declare, is rejected. `timer` is only
    /// consulted by the 555 pump kinds.
    pub fn build(
        self,
        values: &ParamValues,
        timer: &dyn DutyCycleTimer,
    ) -> ComponentResult<Component> {
        for (name, _) in values.iter() {
            if self.param(name).is_none() {
                return Err(ComponentError::UnknownParam {
                    kind: self.name(),
                    name: name.to_string(),
                });
            }
        }

        let args = Args { kind: self, values };
        let component = match self {
            ComponentKind::WaterSource => WaterSource::new(args.number("outflow")?)?.into(),
            ComponentKind::Pump => Pump::new(args.number("outflow")?)?.into(),
            ComponentKind::TimedPump => TimedPump::new(
                args.number("ontime")?,
                args.number("offtime")?,
                args.number("outflow")?,
            )?
            .into(),
            ComponentKind::Timed555Pump => TimerPump::new(
                args.number("r1")?,
                args.number("r2")?,
                args.number("c")?,
                args.number("outflow")?,
                timer,
            )?
            .into(),
            ComponentKind::InvTimed555Pump => TimerPump::inverted(
                args.number("r1")?,
                args.number("r2")?,
                args.number("c")?,
                args.number("outflow")?,
                timer,
            )?
            .into(),
            ComponentKind::SimpleContainer => SimpleContainer::new(
                args.component("previous")?,
                args.number("outflow")?,
                args.number("start_content")?,
            )?
            .into(),
            ComponentKind::Container => Container::new(
                args.component("previous")?,
                args.number("outflow")?,
                args.number("threshold")?,
                args.number("start_content")?,
            )?
            .into(),
            ComponentKind::FloodDrainContainer => FloodDrainContainer::new(
                args.component("previous")?,
                args.number("outflow")?,
                args.number("threshold")?,
                args.number("start_content")?,
            )?
            .into(),
        };
        Ok(component)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = ComponentError;

    /// Case-insensitive match on the kind name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ComponentKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ComponentError::UnknownKind {
                name: s.to_string(),
            })
    }
}

/// A value supplied for one constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Component(ComponentId),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Component(_) => ParamKind::Component,
            ParamValue::Integer(_) => ParamKind::Integer,
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Text(_) => ParamKind::Text,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Component(id) => write!(f, "#{}", id),
            ParamValue::Integer(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Text(v) => f.write_str(v),
        }
    }
}

/// Named parameter values, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamValues {
    entries: Vec<(String, ParamValue)>,
}

impl ParamValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a value, replacing any earlier value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ParamValue)> for ParamValues {
    fn from_iter<I: IntoIterator<Item = (S, ParamValue)>>(iter: I) -> Self {
        let mut values = ParamValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// Typed access to the values of one build call.
struct Args<'a> {
    kind: ComponentKind,
    values: &'a ParamValues,
}

impl Args<'_> {
    fn expected(&self, name: &'static str) -> ParamKind {
        self.kind
            .param(name)
            .map(|p| p.kind)
            .unwrap_or(ParamKind::Float)
    }

    fn number(&self, name: &'static str) -> ComponentResult<f64> {
        let expected = self.expected(name);
        match (expected, self.values.get(name)) {
            (_, None) => Err(ComponentError::MissingParam {
                kind: self.kind.name(),
                name,
            }),
            (ParamKind::Float | ParamKind::Integer, Some(ParamValue::Float(v))) => Ok(*v),
            (ParamKind::Float | ParamKind::Integer, Some(ParamValue::Integer(v))) => Ok(*v as f64),
            _ => Err(ComponentError::WrongParamKind {
                kind: self.kind.name(),
                name,
                expected,
            }),
        }
    }

    fn component(&self, name: &'static str) -> ComponentResult<ComponentId> {
        match self.values.get(name) {
            None => Err(ComponentError::MissingParam {
                kind: self.kind.name(),
                name,
            }),
            Some(ParamValue::Component(id)) => Ok(*id),
            Some(_) => Err(ComponentError::WrongParamKind {
                kind: self.kind.name(),
                name,
                expected: ParamKind::Component,
            }),
        }
    }
}
