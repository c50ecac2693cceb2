//! Graph validation logic.

use std::collections::HashSet;

use hf_core::LinkId;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Link, Node};

/// Validate the graph structure: all link endpoints exist and IDs match slots.
pub(crate) fn validate_structure(nodes: &[Node], links: &[Link]) -> GraphResult<()> {
    for (i, link) in links.iter().enumerate() {
        if link.id.slot() != i {
            return Err(GraphError::InconsistentAdjacency {
                link: link.id,
                node: link.from,
            });
        }
    }

    for link in links {
        for node in [link.from, link.to] {
            if node.slot() >= nodes.len() {
                return Err(GraphError::InvalidNodeRef {
                    link: link.id,
                    node,
                });
            }
        }
    }

    Ok(())
}

/// Validate outgoing adjacency lists for consistency.
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    links: &[Link],
    offsets: &[usize],
    flat: &[LinkId],
) -> GraphResult<()> {
    for node in nodes {
        let idx = node.id.slot();
        let (Some(&start), Some(&end)) = (offsets.get(idx), offsets.get(idx + 1)) else {
            return Err(GraphError::InconsistentAdjacency {
                link: LinkId::from_index(0),
                node: node.id,
            });
        };

        for &link_id in flat.get(start..end).unwrap_or(&[]) {
            match links.get(link_id.slot()) {
                Some(link) if link.from == node.id => {}
                _ => {
                    return Err(GraphError::InconsistentAdjacency {
                        link: link_id,
                        node: node.id,
                    });
                }
            }
        }
    }

    // Every link leaves exactly one node
    let mut seen: HashSet<LinkId> = HashSet::new();
    for &link_id in flat {
        if !seen.insert(link_id) {
            if let Some(link) = links.get(link_id.slot()) {
                return Err(GraphError::InconsistentAdjacency {
                    link: link_id,
                    node: link.from,
                });
            }
        }
    }
    for link in links {
        if !seen.contains(&link.id) {
            return Err(GraphError::InconsistentAdjacency {
                link: link.id,
                node: link.from,
            });
        }
    }

    Ok(())
}
