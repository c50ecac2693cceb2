//! Tree solve: the three phases plus result assembly.

use hf_core::units::convert;
use tracing::debug;

use crate::critical::critical_path;
use crate::demand::link_flows;
use crate::error::{SolverError, SolverResult};
use crate::pressure::{PressureField, propagate};
use crate::problem::TreeProblem;
use crate::results::{CalculationResult, NodeResult, SegmentResult};
use crate::segments::{SegmentState, evaluate_segments};

pub const SUCCESS_MESSAGE: &str = "Calculation completed successfully";

/// Raw per-phase output of a tree solve.
#[derive(Debug, Clone)]
pub struct TreeSolution {
    pub segments: Vec<SegmentState>,
    pub pressures: PressureField,
}

/// Run demand aggregation, segment hydraulics and pressure propagation.
///
/// Warnings are appended to `warnings` as they arise, so they survive a
/// later failure.
pub fn solve(
    problem: &TreeProblem<'_>,
    warnings: &mut Vec<String>,
) -> SolverResult<TreeSolution> {
    let flows = link_flows(problem)?;
    debug!(links = flows.len(), "demand aggregated");

    let segments = evaluate_segments(problem, &flows, warnings)?;
    debug!(segments = segments.len(), "segment hydraulics evaluated");

    let pressures = propagate(problem, &segments, warnings)?;
    debug!(nodes = pressures.order.len(), "pressures propagated");

    Ok(TreeSolution {
        segments,
        pressures,
    })
}

/// Assemble the public result from a finished solve.
pub fn assemble(
    problem: &TreeProblem<'_>,
    solution: &TreeSolution,
    warnings: Vec<String>,
) -> SolverResult<CalculationResult> {
    let config = problem.config;

    let segments = config
        .edges
        .iter()
        .zip(&solution.segments)
        .map(|(edge, state)| {
            let h = &state.hydraulics;
            SegmentResult {
                edge_id: edge.id.clone(),
                from_node: edge.from_node.clone(),
                to_node: edge.to_node.clone(),
                flow_lpm: state.flow_lpm,
                flow_m3s: convert::lpm_to_m3s(state.flow_lpm),
                velocity_ms: h.velocity_mps,
                reynolds: h.reynolds,
                friction_factor: h.friction_factor,
                delta_p_major_bar: convert::pa_to_bar(h.major_loss.value),
                delta_p_minor_bar: convert::pa_to_bar(h.minor_loss.value),
                delta_p_total_bar: convert::pa_to_bar(h.total_loss().value),
                flow_regime: h.regime,
            }
        })
        .collect();

    let field = &solution.pressures;
    let nodes = field
        .order
        .iter()
        .map(|&id| {
            let node = config.nodes.get(id.slot()).ok_or_else(|| SolverError::InvalidState {
                what: format!("node slot {id} out of range"),
            })?;
            let pressure_bar = field.pressure(id).ok_or_else(|| SolverError::InvalidState {
                what: format!("no pressure resolved for node '{}'", node.id),
            })?;
            Ok(NodeResult {
                node_id: node.id.clone(),
                kind: node.kind,
                elevation_m: node.elevation_m,
                demand_lpm: if node.is_active { node.demand_lpm } else { 0.0 },
                pressure_bar,
                is_active: node.is_active,
                distance_from_source_m: field.distance_m.get(id.slot()).copied().unwrap_or(0.0),
            })
        })
        .collect::<SolverResult<Vec<_>>>()?;

    Ok(CalculationResult {
        success: true,
        message: SUCCESS_MESSAGE.to_string(),
        segments,
        nodes,
        critical_path: critical_path(problem, field),
        total_demand_lpm: config.total_active_demand_lpm(),
        warnings,
    })
}
