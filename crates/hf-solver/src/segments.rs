//! Phase B: per-segment hydraulics.

use hf_core::units::lpm;
use hf_hydraulics::{FrictionModel, SegmentHydraulics};
use tracing::warn;

use crate::error::SolverResult;
use crate::problem::TreeProblem;

/// Flow and hydraulic state of one pipe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentState {
    pub flow_lpm: f64,
    pub hydraulics: SegmentHydraulics,
}

/// Evaluate every segment at its flow, in link order.
///
/// A Colebrook solve that hits its iteration cap still yields a value; a
/// warning naming the edge is recorded.
pub fn evaluate_segments(
    problem: &TreeProblem<'_>,
    flows_lpm: &[f64],
    warnings: &mut Vec<String>,
) -> SolverResult<Vec<SegmentState>> {
    let mut states = Vec::with_capacity(problem.segments.len());

    for (segment, &flow_lpm) in problem.segments.iter().zip(flows_lpm) {
        let hydraulics =
            segment.evaluate(lpm(flow_lpm), &problem.fluid, problem.friction_model)?;

        if !hydraulics.converged && problem.friction_model == FrictionModel::Colebrook {
            warn!(edge = segment.name(), "Colebrook-White iteration did not converge");
            warnings.push(format!(
                "Warning: Colebrook-White friction factor did not converge for edge {}",
                segment.name()
            ));
        }

        states.push(SegmentState {
            flow_lpm,
            hydraulics,
        });
    }

    Ok(states)
}
