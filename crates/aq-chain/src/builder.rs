//! Chain builder.

use aq_components::{Component, ComponentKind, ParamValue, ParamValues};
use aq_controls::{Astable555, DutyCycleTimer};
use aq_core::ComponentId;

use crate::chain::Chain;
use crate::error::{ChainError, ChainResult};

/// Builder for assembling a chain one component at a time.
///
/// Components added by kind are wired to the component added just before
/// them unless their values already name a `previous`.
#[derive(Debug, Clone)]
pub struct ChainBuilder<T = Astable555> {
    chain: Chain,
    timer: T,
}

impl ChainBuilder<Astable555> {
    pub fn new() -> Self {
        Self::with_timer(Astable555)
    }
}

impl Default for ChainBuilder<Astable555> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DutyCycleTimer> ChainBuilder<T> {
    /// Builder whose 555 pumps take their durations from `timer`.
    pub fn with_timer(timer: T) -> Self {
        Self {
            chain: Chain::new(),
            timer,
        }
    }

    /// Append an already built component.
    pub fn add(&mut self, component: impl Into<Component>) -> ChainResult<ComponentId> {
        self.chain.push(component)
    }

    /// Build a component of `kind` from `values` and append it.
    pub fn add_kind(
        &mut self,
        kind: ComponentKind,
        mut values: ParamValues,
    ) -> ChainResult<ComponentId> {
        if kind.needs_predecessor() && !values.contains("previous") {
            let previous = self
                .chain
                .last_id()
                .ok_or(ChainError::RequiresPredecessor { kind })?;
            values.insert("previous", ParamValue::Component(previous));
        }

        let component = kind.build(&values, &self.timer)?;
        let id = self.chain.push(component)?;
        tracing::debug!(%id, %kind, "added component");
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Finish the chain. An empty chain is an error.
    pub fn build(self) -> ChainResult<Chain> {
        if self.chain.is_empty() {
            return Err(ChainError::Empty);
        }
        Ok(self.chain)
    }
}
