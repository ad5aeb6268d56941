//! Chain-specific error types.

use aq_components::{ComponentError, ComponentKind};
use aq_core::ComponentId;

/// Chain assembly and stepping errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainError {
    /// A chain needs at least one component.
    Empty,

    /// A component that draws from a predecessor was placed first.
    RequiresPredecessor { kind: ComponentKind },

    /// A component references a predecessor that is not earlier in the chain.
    InvalidPredecessor {
        at: ComponentId,
        previous: ComponentId,
    },

    /// ID does not name a chain position.
    IdNotFound { id: ComponentId },

    /// Building or stepping a component failed.
    Component(ComponentError),
}

pub type ChainResult<T> = Result<T, ChainError>;

impl std::fmt::Display for ChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainError::Empty => {
                write!(f, "No model components have been defined")
            }
            ChainError::RequiresPredecessor { kind } => {
                write!(
                    f,
                    "{} can't be the first component; it needs a source of water",
                    kind
                )
            }
            ChainError::InvalidPredecessor { at, previous } => {
                write!(
                    f,
                    "Component {} draws from {}, which is not earlier in the chain",
                    at, previous
                )
            }
            ChainError::IdNotFound { id } => {
                write!(f, "Component {} not found in chain", id)
            }
            ChainError::Component(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChainError::Component(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ComponentError> for ChainError {
    fn from(e: ComponentError) -> Self {
        ChainError::Component(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ChainError::RequiresPredecessor {
            kind: ComponentKind::FloodDrainContainer,
        };
        assert!(err.to_string().starts_with("FloodDrainContainer can't be the first"));

        let err = ChainError::InvalidPredecessor {
            at: ComponentId::from_index(1),
            previous: ComponentId::from_index(4),
        };
        assert_eq!(
            err.to_string(),
            "Component 1 draws from 4, which is not earlier in the chain"
        );
    }
}
