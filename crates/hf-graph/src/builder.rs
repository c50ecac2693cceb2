//! Incremental graph builder.

use hf_core::{LinkId, NodeId};

use crate::error::GraphResult;
use crate::graph::{Graph, Link, Node};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_node` and `add_link` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph and return its ID.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            name: name.into(),
        });
        id
    }

    /// Add a directed link from `from` to `to` and return its ID.
    pub fn add_link(&mut self, name: impl Into<String>, from: NodeId, to: NodeId) -> LinkId {
        let id = LinkId::from_index(self.links.len() as u32);
        self.links.push(Link {
            id,
            name: name.into(),
            from,
            to,
        });
        id
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> GraphResult<Graph> {
        validate::validate_structure(&self.nodes, &self.links)?;

        let (out_offsets, out_links) = Self::build_adjacency(&self.nodes, &self.links, |l| l.from);
        let (in_offsets, in_links) = Self::build_adjacency(&self.nodes, &self.links, |l| l.to);

        validate::validate_adjacency(&self.nodes, &self.links, &out_offsets, &out_links)?;

        Ok(Graph {
            nodes: self.nodes,
            links: self.links,
            out_offsets,
            out_links,
            in_offsets,
            in_links,
        })
    }

    /// Build compact adjacency lists keyed by the endpoint `key` selects.
    ///
    /// Links keep declaration order within each node's list.
    fn build_adjacency(
        nodes: &[Node],
        links: &[Link],
        key: impl Fn(&Link) -> NodeId,
    ) -> (Vec<usize>, Vec<LinkId>) {
        let mut per_node: Vec<Vec<LinkId>> = vec![Vec::new(); nodes.len()];
        for link in links {
            if let Some(list) = per_node.get_mut(key(link).slot()) {
                list.push(link.id);
            }
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat = Vec::with_capacity(links.len());
        offsets.push(0);
        for list in per_node {
            flat.extend(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node("Node1");
        let n2 = builder.add_node("Node2");
        let l1 = builder.add_link("Pipe1", n1, n2);

        assert_eq!(n1.index(), 0);
        assert_eq!(n2.index(), 1);
        assert_eq!(l1.index(), 0);
        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.links.len(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node("N1");
        let n2 = builder.add_node("N2");
        builder.add_link("P1", n1, n2);

        let graph = builder.build().unwrap();
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.links().len(), 1);

        assert_eq!(graph.outgoing(n1).len(), 1);
        assert_eq!(graph.incoming(n1).len(), 0);
        assert_eq!(graph.outgoing(n2).len(), 0);
        assert_eq!(graph.incoming(n2).len(), 1);
    }

    #[test]
    fn builder_rejects_dangling_link() {
        let mut builder = GraphBuilder::new();
        let n1 = builder.add_node("N1");
        builder.add_link("P1", n1, NodeId::from_index(7));
        assert!(builder.build().is_err());
    }
}
