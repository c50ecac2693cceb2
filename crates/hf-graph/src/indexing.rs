//! Name lookup for graph objects.
//!
//! Network inputs address nodes and pipes by string identifiers; the graph
//! works on compact IDs. `NameIndex` maps between the two.

use std::collections::HashMap;

use hf_core::{LinkId, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Index from names to IDs.
///
/// When a name occurs more than once the first declaration wins; callers that
/// care about duplicates check for them before building the graph.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    nodes: HashMap<String, NodeId>,
    links: HashMap<String, LinkId>,
}

impl NameIndex {
    /// Build a name index from a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut index = Self::default();
        for node in graph.nodes() {
            index.nodes.entry(node.name.clone()).or_insert(node.id);
        }
        for link in graph.links() {
            index.links.entry(link.name.clone()).or_insert(link.id);
        }
        index
    }

    /// Number of distinct node names.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct link names.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Look up a node ID by name.
    pub fn node_id(&self, name: &str) -> GraphResult<NodeId> {
        self.nodes
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NameNotFound {
                what: "Node",
                name: name.to_string(),
            })
    }

    /// Look up a link ID by name.
    pub fn link_id(&self, name: &str) -> GraphResult<LinkId> {
        self.links
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NameNotFound {
                what: "Link",
                name: name.to_string(),
            })
    }

    /// Whether a node with this name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    #[test]
    fn name_index_basic() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node("S");
        let n2 = builder.add_node("H1");
        let p1 = builder.add_link("P1", n1, n2);
        let graph = builder.build().unwrap();

        let index = NameIndex::from_graph(&graph);

        assert_eq!(index.node_count(), 2);
        assert_eq!(index.link_count(), 1);
        assert_eq!(index.node_id("S").unwrap(), n1);
        assert_eq!(index.node_id("H1").unwrap(), n2);
        assert_eq!(index.link_id("P1").unwrap(), p1);
        assert!(index.contains_node("S"));
    }

    #[test]
    fn name_index_unknown_name() {
        let mut builder = GraphBuilder::new();
        builder.add_node("S");
        let graph = builder.build().unwrap();

        let index = NameIndex::from_graph(&graph);
        let err = index.node_id("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn first_declaration_wins() {
        let mut builder = GraphBuilder::new();
        let first = builder.add_node("J");
        builder.add_node("J");
        let graph = builder.build().unwrap();

        let index = NameIndex::from_graph(&graph);
        assert_eq!(index.node_count(), 1);
        assert_eq!(index.node_id("J").unwrap(), first);
    }
}
