//! Top-level entry points: validate, solve, never fail.

use hf_network::{NetworkConfig, validate};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::SolverResult;
use crate::problem::TreeProblem;
use crate::results::CalculationResult;
use crate::solve::{assemble, solve};

/// Validate `config` and run the tree calculation.
///
/// Never returns an error: an invalid network or an internal failure comes
/// back as `success == false` with a descriptive message.
pub fn calculate(config: &NetworkConfig) -> CalculationResult {
    let report = validate(config);
    if !report.is_valid() {
        info!(errors = report.errors.len(), "network rejected by validation");
        return CalculationResult::failure(
            format!("Network validation failed: {}", report.messages().join("; ")),
            Vec::new(),
        );
    }
    calculate_unvalidated(config)
}

/// Run the tree calculation without structural validation.
///
/// For callers that have validated already, or that want best-effort results
/// from a network that fails only the demand checks.
pub fn calculate_unvalidated(config: &NetworkConfig) -> CalculationResult {
    let mut warnings = Vec::new();
    match run(config, &mut warnings) {
        Ok(result) => result,
        Err(e) => {
            debug!(error = %e, "calculation failed");
            CalculationResult::failure(format!("Calculation error: {e}"), warnings)
        }
    }
}

fn run(config: &NetworkConfig, warnings: &mut Vec<String>) -> SolverResult<CalculationResult> {
    let problem = TreeProblem::from_config(config)?;
    let solution = solve(&problem, warnings)?;
    assemble(&problem, &solution, std::mem::take(warnings))
}

/// Calculate independent networks in parallel; results keep the input order.
pub fn calculate_many(configs: &[NetworkConfig]) -> Vec<CalculationResult> {
    configs.par_iter().map(calculate).collect()
}
