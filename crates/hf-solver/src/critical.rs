//! Critical path: the route to the worst-served active hydrant.

use hf_core::NodeId;

use crate::pressure::PressureField;
use crate::problem::TreeProblem;
use crate::results::CriticalPath;

/// Lowest-pressure active hydrant, ties going to the smallest node id.
pub fn critical_hydrant(
    problem: &TreeProblem<'_>,
    field: &PressureField,
) -> Option<(NodeId, f64)> {
    field
        .order
        .iter()
        .filter(|&&node| {
            problem
                .config
                .nodes
                .get(node.slot())
                .is_some_and(|n| n.is_demand_point())
        })
        .filter_map(|&node| field.pressure(node).map(|p| (node, p)))
        .min_by(|(a, pa), (b, pb)| {
            pa.total_cmp(pb)
                .then_with(|| problem.node_name(*a).cmp(problem.node_name(*b)))
        })
}

/// Walk parent pipes from the critical hydrant back to the source.
pub fn critical_path(problem: &TreeProblem<'_>, field: &PressureField) -> Option<CriticalPath> {
    let (hydrant, pressure) = critical_hydrant(problem, field)?;
    let graph = &problem.graph;

    let mut path_nodes = vec![problem.node_name(hydrant).to_string()];
    let mut path_edges = Vec::new();
    let mut total_length_m = 0.0;

    let mut current = hydrant;
    // A tree path has at most one pipe per node.
    for _ in 0..graph.nodes().len() {
        if current == problem.source {
            break;
        }
        let Some(link) = graph.parent_link(current) else {
            break;
        };
        path_edges.push(link.name.clone());
        path_nodes.push(problem.node_name(link.from).to_string());
        total_length_m += problem.length_m(link.id);
        current = link.from;
    }

    path_nodes.reverse();
    path_edges.reverse();

    Some(CriticalPath {
        path_nodes,
        path_edges,
        total_length_m,
        critical_hydrant: problem.node_name(hydrant).to_string(),
        critical_pressure_bar: pressure,
    })
}
