//! Phase A: demand aggregation.
//!
//! In a tree the flow through a pipe is the total demand of the subtree hanging
//! off its downstream node.

use hf_graph::traverse;

use crate::error::SolverResult;
use crate::problem::TreeProblem;

/// Subtree demand per node slot, L/min.
///
/// Nodes are visited in post-order so every child total is final before its
/// parent reads it; each node is summed exactly once.
pub fn subtree_demand(problem: &TreeProblem<'_>) -> SolverResult<Vec<f64>> {
    let graph = &problem.graph;
    let mut total = problem.demand_lpm.clone();

    for node in traverse::post_order(graph)? {
        let downstream: f64 = graph
            .children(node)
            .map(|(_, child)| total.get(child.slot()).copied().unwrap_or(0.0))
            .sum();
        if let Some(slot) = total.get_mut(node.slot()) {
            *slot += downstream;
        }
    }

    Ok(total)
}

/// Flow per link slot, L/min.
pub fn link_flows(problem: &TreeProblem<'_>) -> SolverResult<Vec<f64>> {
    let subtree = subtree_demand(problem)?;
    Ok(problem
        .graph
        .links()
        .iter()
        .map(|link| subtree.get(link.to.slot()).copied().unwrap_or(0.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use hf_network::{Edge, NetworkConfig, Node, demo_network};

    #[test]
    fn demo_flows() {
        let config = demo_network();
        let problem = TreeProblem::from_config(&config).unwrap();
        assert_eq!(link_flows(&problem).unwrap(), vec![1000.0, 500.0, 500.0, 500.0]);
    }

    #[test]
    fn inactive_hydrant_carries_nothing() {
        let mut config = demo_network();
        config.nodes[4].is_active = false;
        let problem = TreeProblem::from_config(&config).unwrap();

        assert_eq!(link_flows(&problem).unwrap(), vec![500.0, 0.0, 500.0, 0.0]);
        assert_eq!(subtree_demand(&problem).unwrap()[0], 500.0);
    }

    #[test]
    fn junction_demand_is_ignored() {
        let mut junction = Node::junction("J1");
        junction.demand_lpm = 250.0;
        let config = NetworkConfig::new(
            8.0,
            vec![Node::source("S"), junction, Node::hydrant("H1", 100.0)],
            vec![
                Edge::new("P1", "S", "J1", 10.0, 100.0),
                Edge::new("P2", "J1", "H1", 10.0, 100.0),
            ],
        );
        let problem = TreeProblem::from_config(&config).unwrap();
        assert_eq!(link_flows(&problem).unwrap(), vec![100.0, 100.0]);
    }

    #[test]
    fn cycle_is_an_error() {
        let config = NetworkConfig::new(
            8.0,
            vec![Node::source("S"), Node::junction("A"), Node::hydrant("B", 1.0)],
            vec![
                Edge::new("P1", "S", "A", 10.0, 100.0),
                Edge::new("P2", "A", "B", 10.0, 100.0),
                Edge::new("P3", "B", "A", 10.0, 100.0),
            ],
        );
        let problem = TreeProblem::from_config(&config).unwrap();
        assert!(matches!(link_flows(&problem), Err(SolverError::Graph(_))));
    }
}
