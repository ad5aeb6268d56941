//! The component arena and one-tick stepping.

use aq_components::{Component, ComponentResult, FlowComponent, StateSample};
use aq_core::ComponentId;

use crate::error::{ChainError, ChainResult};
use crate::validate;

/// Ordered components, each addressed by its position.
///
/// Water enters at the front and each container draws from an earlier
/// position. Predecessor links are ids into this arena, never references.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    components: Vec<Component>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from a full component list, checking every link.
    pub fn from_components(components: Vec<Component>) -> ChainResult<Self> {
        validate::validate_chain(&components)?;
        Ok(Self { components })
    }

    /// Append a component, returning its id.
    pub fn push(&mut self, component: impl Into<Component>) -> ChainResult<ComponentId> {
        let component = component.into();
        validate::validate_append(self.components.len(), &component)?;
        let id = ComponentId::from_index(self.components.len() as u32);
        self.components.push(component);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: ComponentId) -> ChainResult<&Component> {
        self.components
            .get(id.as_usize())
            .ok_or(ChainError::IdNotFound { id })
    }

    /// Id of the last component, if any.
    pub fn last_id(&self) -> Option<ComponentId> {
        self.components
            .len()
            .checked_sub(1)
            .map(|i| ComponentId::from_index(i as u32))
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Iterate `(id, component)` in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &Component)> {
        self.components
            .iter()
            .enumerate()
            .map(|(i, c)| (ComponentId::from_index(i as u32), c))
    }

    /// Current state of every component, in chain order.
    pub fn states(&self) -> Vec<StateSample> {
        self.components.iter().map(FlowComponent::state).collect()
    }

    /// Inflow the component at `id` would receive right now.
    pub fn inflow_lpm(&self, id: ComponentId) -> ChainResult<Option<f64>> {
        match self.get(id)?.previous() {
            Some(prev) => Ok(Some(self.get(prev)?.outflow_lpm())),
            None => Ok(None),
        }
    }

    /// Advance every component by `elapsed_s`, last to first.
    ///
    /// Stepping backwards means each container sees its predecessor's
    /// outflow from before the predecessor was updated this tick.
    pub fn step_all(&mut self, elapsed_s: f64) -> ComponentResult<()> {
        for i in (0..self.components.len()).rev() {
            let inflow = self.components[i]
                .previous()
                .and_then(|prev| self.components.get(prev.as_usize()))
                .map(FlowComponent::outflow_lpm);
            self.components[i].step(elapsed_s, inflow)?;
        }
        Ok(())
    }
}
