//! Phase C: pressure propagation from the source outward.

use hf_core::NodeId;
use hf_core::units::convert;
use hf_graph::traverse;
use tracing::warn;

use crate::error::{SolverError, SolverResult};
use crate::problem::TreeProblem;
use crate::segments::SegmentState;

/// Resolved pressures and distances, indexed by node slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureField {
    /// Gauge pressure in bar; `None` for nodes the source does not reach.
    pub pressure_bar: Vec<Option<f64>>,
    /// Pipe length from the source along the tree, m.
    pub distance_m: Vec<f64>,
    /// Breadth-first visit order from the source.
    pub order: Vec<NodeId>,
}

impl PressureField {
    pub fn pressure(&self, node: NodeId) -> Option<f64> {
        self.pressure_bar.get(node.slot()).copied().flatten()
    }
}

/// Propagate pressure breadth-first from the source.
///
/// `p_down = p_up - pipe loss - elevation term`. A negative result is recorded
/// as a warning and propagation carries on from it.
pub fn propagate(
    problem: &TreeProblem<'_>,
    segments: &[SegmentState],
    warnings: &mut Vec<String>,
) -> SolverResult<PressureField> {
    let graph = &problem.graph;
    let node_count = graph.nodes().len();
    let mut pressure_bar = vec![None; node_count];
    let mut distance_m = vec![0.0; node_count];

    let order = traverse::bfs_order(graph, problem.source);

    for &node in &order {
        let pressure = if node == problem.source {
            problem.source_pressure_bar
        } else {
            let link = graph.parent_link(node).ok_or_else(|| SolverError::InvalidState {
                what: format!("node '{}' has no upstream pipe", problem.node_name(node)),
            })?;
            let upstream = pressure_bar
                .get(link.from.slot())
                .copied()
                .flatten()
                .ok_or_else(|| SolverError::InvalidState {
                    what: format!(
                        "upstream node '{}' resolved after '{}'",
                        problem.node_name(link.from),
                        problem.node_name(node)
                    ),
                })?;
            let state = segments
                .get(link.id.slot())
                .ok_or_else(|| SolverError::InvalidState {
                    what: format!("no segment result for '{}'", link.name),
                })?;

            distance_m[node.slot()] = distance_m[link.from.slot()] + problem.length_m(link.id);

            let pipe_loss = convert::pa_to_bar(state.hydraulics.total_loss().value);
            upstream - pipe_loss - problem.elevation_drop_bar(link.from, node)
        };

        if pressure < 0.0 {
            let id = problem.node_name(node);
            warn!(node = id, pressure_bar = pressure, "negative gauge pressure");
            warnings.push(format!(
                "Warning: Negative gauge pressure at node {id} ({pressure:.2} bar)"
            ));
        }
        pressure_bar[node.slot()] = Some(pressure);
    }

    Ok(PressureField {
        pressure_bar,
        distance_m,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::link_flows;
    use crate::segments::evaluate_segments;
    use hf_network::{Edge, NetworkConfig, Node, demo_network};

    fn run(config: &NetworkConfig) -> (PressureField, Vec<String>) {
        let problem = TreeProblem::from_config(config).unwrap();
        let flows = link_flows(&problem).unwrap();
        let mut warnings = Vec::new();
        let segments = evaluate_segments(&problem, &flows, &mut warnings).unwrap();
        let field = propagate(&problem, &segments, &mut warnings).unwrap();
        (field, warnings)
    }

    #[test]
    fn demo_pressures_fall_downstream() {
        let (field, warnings) = run(&demo_network());
        let p = |i: u32| field.pressure(NodeId::from_index(i)).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(p(0), 8.0);
        assert!(p(1) < p(0));
        assert!(p(2) < p(1));
        assert!(p(3) < p(1));
        assert!(p(4) < p(2));
        assert_eq!(field.distance_m, vec![0.0, 50.0, 80.0, 70.0, 105.0]);
    }

    #[test]
    fn bfs_order_from_source() {
        let (field, _) = run(&demo_network());
        let order: Vec<u32> = field.order.iter().map(|n| n.index()).collect();
        // S, J1, then J1's children in edge order (J2 via P2, H1 via P3), then H2
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn negative_pressure_warns_and_continues() {
        let config = NetworkConfig::new(
            0.5,
            vec![
                Node::source("S"),
                Node::junction("J1"),
                Node::hydrant("H1", 800.0).at_elevation(10.0),
            ],
            vec![
                Edge::new("P1", "S", "J1", 200.0, 50.0),
                Edge::new("P2", "J1", "H1", 50.0, 50.0),
            ],
        );
        let (field, warnings) = run(&config);

        let j1 = field.pressure(NodeId::from_index(1)).unwrap();
        let h1 = field.pressure(NodeId::from_index(2)).unwrap();
        assert!(j1 < 0.0);
        assert!(h1 < j1);
        assert_eq!(warnings.len(), 2);
        assert_eq!(
            warnings[0],
            format!("Warning: Negative gauge pressure at node J1 ({j1:.2} bar)")
        );
        assert!(warnings[1].contains("node H1"));
    }

    #[test]
    fn elevation_can_raise_pressure() {
        let config = NetworkConfig::new(
            5.0,
            vec![Node::source("S").at_elevation(20.0), Node::hydrant("H1", 1.0)],
            vec![Edge::new("P1", "S", "H1", 10.0, 100.0)],
        );
        let (field, _) = run(&config);
        assert!(field.pressure(NodeId::from_index(1)).unwrap() > 5.0);
    }
}
