//! Property: pipe flow equals the active demand of its downstream subtree.

use hf_network::{Edge, NetworkConfig, Node};
use hf_solver::calculate;
use proptest::prelude::*;

/// (parent choice, demand, active) per non-source node.
fn tree_strategy() -> impl Strategy<Value = Vec<(usize, u32, bool)>> {
    prop::collection::vec((0usize..1000, 0u32..2000, any::<bool>()), 1..25)
}

fn build(layout: &[(usize, u32, bool)]) -> (NetworkConfig, Vec<usize>) {
    let mut nodes = vec![Node::source("N0")];
    let mut edges = Vec::new();
    let mut parents = vec![0];
    for (i, &(p, demand, active)) in layout.iter().enumerate() {
        let child = i + 1;
        let parent = p % child;
        let mut node = Node::hydrant(format!("N{child}"), f64::from(demand));
        // Keep at least one positive active demand so validation passes.
        node.is_active = active || child == 1;
        if child == 1 {
            node.demand_lpm += 1.0;
        }
        nodes.push(node);
        edges.push(Edge::new(
            format!("E{child}"),
            format!("N{parent}"),
            format!("N{child}"),
            25.0,
            150.0,
        ));
        parents.push(parent);
    }
    (NetworkConfig::new(10.0, nodes, edges), parents)
}

proptest! {
    #[test]
    fn flow_is_downstream_demand(layout in tree_strategy()) {
        let (config, parents) = build(&layout);
        let result = calculate(&config);
        prop_assert!(result.success, "{}", result.message);

        // Children always have larger indices than their parents.
        let mut subtree: Vec<f64> = config.nodes.iter().map(|n| n.effective_demand_lpm()).collect();
        for child in (1..subtree.len()).rev() {
            subtree[parents[child]] += subtree[child];
        }

        for (i, seg) in result.segments.iter().enumerate() {
            prop_assert_eq!(seg.flow_lpm, subtree[i + 1]);
        }
        prop_assert_eq!(result.total_demand_lpm, subtree[0]);
        prop_assert_eq!(result.nodes.len(), config.nodes.len());
    }

    #[test]
    fn pressure_never_rises_on_level_ground(layout in tree_strategy()) {
        let (config, _) = build(&layout);
        let result = calculate(&config);
        prop_assert!(result.success);

        for seg in &result.segments {
            let up = result.node(&seg.from_node).unwrap().pressure_bar;
            let down = result.node(&seg.to_node).unwrap().pressure_bar;
            prop_assert!(down <= up);
            prop_assert!((up - down - seg.delta_p_total_bar).abs() < 1e-9);
        }
    }
}
