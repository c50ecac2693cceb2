//! Core graph data structures.

use hf_core::{LinkId, NodeId};

/// A node in the pipe network graph (source, junction or demand point).
///
/// Nodes are minimal: hydraulic data lives with the caller, the graph only
/// keeps an ID and a name for human reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// A directed link (pipe segment) from one node to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub name: String,
    pub from: NodeId,
    pub to: NodeId,
}

/// The graph: a validated, immutable collection of nodes and directed links.
///
/// The graph stores:
/// - All nodes and links in vectors (indexed by their IDs).
/// - Compact adjacency: for each node, its outgoing and incoming links.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) links: Vec<Link>,

    /// Node i's outgoing links are in out_links[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_links: Vec<LinkId>,

    /// Same layout for incoming links.
    pub(crate) in_offsets: Vec<usize>,
    pub(crate) in_links: Vec<LinkId>,
}

impl Graph {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all links.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// Get a link by ID (returns None if ID out of bounds).
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.slot())
    }

    /// Links leaving `node_id`, in declaration order.
    pub fn outgoing(&self, node_id: NodeId) -> &[LinkId] {
        Self::slice(&self.out_offsets, &self.out_links, node_id)
    }

    /// Links entering `node_id`, in declaration order.
    pub fn incoming(&self, node_id: NodeId) -> &[LinkId] {
        Self::slice(&self.in_offsets, &self.in_links, node_id)
    }

    /// The link feeding `node_id`. In a tree every non-root node has exactly one.
    pub fn parent_link(&self, node_id: NodeId) -> Option<&Link> {
        self.incoming(node_id)
            .first()
            .and_then(|&link| self.link(link))
    }

    /// Iterate over `(link, downstream node)` pairs leaving `node_id`.
    pub fn children(&self, node_id: NodeId) -> impl Iterator<Item = (&Link, NodeId)> + '_ {
        self.outgoing(node_id)
            .iter()
            .filter_map(|&link| self.link(link))
            .map(|link| (link, link.to))
    }

    fn slice<'a>(offsets: &[usize], flat: &'a [LinkId], node_id: NodeId) -> &'a [LinkId] {
        let idx = node_id.slot();
        match (offsets.get(idx), offsets.get(idx + 1)) {
            (Some(&start), Some(&end)) => flat.get(start..end).unwrap_or(&[]),
            _ => &[],
        }
    }
}
