//! Graph-specific error types.

use hf_core::{HfError, LinkId, NodeId};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and traversal errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A link refers to a node that doesn't exist.
    #[error("Link {link} refers to non-existent node {node}")]
    InvalidNodeRef { link: LinkId, node: NodeId },

    /// Adjacency list is inconsistent with the link table.
    #[error("Link {link} in node {node}'s adjacency list but doesn't leave that node")]
    InconsistentAdjacency { link: LinkId, node: NodeId },

    /// Name not found in the name index.
    #[error("{what} '{name}' not found")]
    NameNotFound { what: &'static str, name: String },

    /// A directed cycle was found where an acyclic graph is required.
    #[error("Cycle detected: link {link} closes a loop at node {node}")]
    Cycle { link: LinkId, node: NodeId },
}

impl From<GraphError> for HfError {
    fn from(err: GraphError) -> Self {
        HfError::Invariant {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_link() {
        let err = GraphError::Cycle {
            link: LinkId::from_index(3),
            node: NodeId::from_index(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("link 3"));
        assert!(msg.contains("node 1"));
    }

    #[test]
    fn converts_to_invariant() {
        let err: HfError = GraphError::NameNotFound {
            what: "Node",
            name: "J9".into(),
        }
        .into();
        assert!(matches!(err, HfError::Invariant { .. }));
    }
}
