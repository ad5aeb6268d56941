//! Chain validation logic.

use aq_components::{Component, FlowComponent};
use aq_core::ComponentId;

use crate::error::{ChainError, ChainResult};

/// Check that `component` may be appended at position `len`.
pub(crate) fn validate_append(len: usize, component: &Component) -> ChainResult<()> {
    let at = ComponentId::from_index(len as u32);

    match component.previous() {
        None => Ok(()),
        Some(_) if len == 0 => Err(ChainError::RequiresPredecessor {
            kind: component.kind(),
        }),
        Some(previous) if previous >= at => Err(ChainError::InvalidPredecessor { at, previous }),
        Some(previous) => {
            if previous.as_usize() + 1 != len {
                tracing::warn!(
                    %at,
                    %previous,
                    "component does not draw from the one directly before it"
                );
            }
            Ok(())
        }
    }
}

/// Check a whole component list, as for a finished chain.
pub(crate) fn validate_chain(components: &[Component]) -> ChainResult<()> {
    if components.is_empty() {
        return Err(ChainError::Empty);
    }
    for (i, component) in components.iter().enumerate() {
        validate_append(i, component)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_components::{Container, Pump};

    fn container(previous: u32) -> Component {
        Container::new(ComponentId::from_index(previous), 1.0, 1.0, 0.0)
            .unwrap()
            .into()
    }

    #[test]
    fn container_cannot_be_first() {
        assert_eq!(
            validate_append(0, &container(0)),
            Err(ChainError::RequiresPredecessor {
                kind: aq_components::ComponentKind::Container
            })
        );
    }

    #[test]
    fn predecessor_must_be_earlier() {
        assert!(validate_append(2, &container(1)).is_ok());
        assert!(validate_append(2, &container(0)).is_ok());
        assert!(matches!(
            validate_append(2, &container(2)),
            Err(ChainError::InvalidPredecessor { .. })
        ));
    }

    #[test]
    fn empty_chain_rejected() {
        assert_eq!(validate_chain(&[]), Err(ChainError::Empty));
        let pump: Component = Pump::new(1.0).unwrap().into();
        assert!(validate_chain(&[pump, container(0)]).is_ok());
    }
}
