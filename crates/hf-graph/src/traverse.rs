//! Graph traversals over directed adjacency (from -> to).
//!
//! All traversals use explicit stacks/queues so deep networks cannot exhaust
//! the call stack.

use std::collections::VecDeque;

use hf_core::{LinkId, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// The link that closes a directed cycle and the node it re-enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleWitness {
    pub link: LinkId,
    pub node: NodeId,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Depth-first search from every unvisited node in declaration order.
///
/// Calls `on_finish` for each node once all its descendants are finished.
/// Stops at the first link that leads to a node on the current stack.
fn depth_first(graph: &Graph, mut on_finish: impl FnMut(NodeId)) -> Result<(), CycleWitness> {
    let mut marks = vec![Mark::Unvisited; graph.nodes().len()];

    for root in graph.nodes() {
        if marks[root.id.slot()] != Mark::Unvisited {
            continue;
        }
        marks[root.id.slot()] = Mark::OnStack;
        let mut stack: Vec<(NodeId, usize)> = vec![(root.id, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            match graph.outgoing(node).get(frame.1).copied() {
                Some(link_id) => {
                    frame.1 += 1;
                    let Some(link) = graph.link(link_id) else {
                        continue;
                    };
                    match marks[link.to.slot()] {
                        Mark::OnStack => {
                            return Err(CycleWitness {
                                link: link_id,
                                node: link.to,
                            });
                        }
                        Mark::Unvisited => {
                            marks[link.to.slot()] = Mark::OnStack;
                            stack.push((link.to, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node.slot()] = Mark::Done;
                    on_finish(node);
                    stack.pop();
                }
            }
        }
    }

    Ok(())
}

/// Find the first directed cycle, if any.
pub fn find_cycle(graph: &Graph) -> Option<CycleWitness> {
    depth_first(graph, |_| {}).err()
}

/// Every node ordered so that each appears after all nodes downstream of it.
///
/// Fails with [`GraphError::Cycle`] when the graph has a directed cycle.
pub fn post_order(graph: &Graph) -> GraphResult<Vec<NodeId>> {
    let mut order = Vec::with_capacity(graph.nodes().len());
    depth_first(graph, |node| order.push(node))
        .map_err(|w| GraphError::Cycle {
            link: w.link,
            node: w.node,
        })?;
    Ok(order)
}

/// Breadth-first visit order starting at `start`; each node appears once.
pub fn bfs_order(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; graph.nodes().len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    if graph.node(start).is_none() {
        return order;
    }
    visited[start.slot()] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for (_, next) in graph.children(node) {
            if !visited[next.slot()] {
                visited[next.slot()] = true;
                queue.push_back(next);
            }
        }
    }

    order
}

/// Nodes not reachable from `start` following links in their declared direction.
pub fn unreachable_from(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    let mut reached = vec![false; graph.nodes().len()];
    for node in bfs_order(graph, start) {
        reached[node.slot()] = true;
    }
    graph
        .nodes()
        .iter()
        .filter(|n| !reached[n.id.slot()])
        .map(|n| n.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;

    fn branched() -> (Graph, Vec<NodeId>) {
        // S -> J1 -> {H1, J2 -> H2}
        let mut b = GraphBuilder::new();
        let s = b.add_node("S");
        let j1 = b.add_node("J1");
        let j2 = b.add_node("J2");
        let h1 = b.add_node("H1");
        let h2 = b.add_node("H2");
        b.add_link("P1", s, j1);
        b.add_link("P2", j1, j2);
        b.add_link("P3", j1, h1);
        b.add_link("P4", j2, h2);
        (b.build().unwrap(), vec![s, j1, j2, h1, h2])
    }

    #[test]
    fn bfs_visits_by_level() {
        let (graph, n) = branched();
        assert_eq!(bfs_order(&graph, n[0]), vec![n[0], n[1], n[2], n[3], n[4]]);
    }

    #[test]
    fn post_order_puts_children_first() {
        let (graph, n) = branched();
        let order = post_order(&graph).unwrap();
        let pos = |id: NodeId| order.iter().position(|&x| x == id).unwrap();

        assert_eq!(order.len(), 5);
        assert!(pos(n[4]) < pos(n[2]));
        assert!(pos(n[2]) < pos(n[1]));
        assert!(pos(n[3]) < pos(n[1]));
        assert!(pos(n[1]) < pos(n[0]));
    }

    #[test]
    fn acyclic_graph_has_no_cycle() {
        let (graph, _) = branched();
        assert!(find_cycle(&graph).is_none());
    }

    #[test]
    fn back_link_is_reported() {
        let mut b = GraphBuilder::new();
        let s = b.add_node("S");
        let a = b.add_node("A");
        let c = b.add_node("C");
        b.add_link("P1", s, a);
        b.add_link("P2", a, c);
        let back = b.add_link("P3", c, a);
        let graph = b.build().unwrap();

        let witness = find_cycle(&graph).unwrap();
        assert_eq!(witness.link, back);
        assert_eq!(witness.node, a);
        assert!(matches!(post_order(&graph), Err(GraphError::Cycle { .. })));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut b = GraphBuilder::new();
        let s = b.add_node("S");
        let l = b.add_link("P1", s, s);
        let graph = b.build().unwrap();

        assert_eq!(find_cycle(&graph).map(|w| w.link), Some(l));
    }

    #[test]
    fn unreachable_respects_direction() {
        // S -> A, B -> A : B cannot be reached from S
        let mut b = GraphBuilder::new();
        let s = b.add_node("S");
        let a = b.add_node("A");
        let orphan = b.add_node("B");
        b.add_link("P1", s, a);
        b.add_link("P2", orphan, a);
        let graph = b.build().unwrap();

        assert_eq!(unreachable_from(&graph, s), vec![orphan]);
    }
}
