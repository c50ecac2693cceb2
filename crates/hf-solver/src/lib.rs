//! Tree flow and pressure engine for hydrant networks.
//!
//! A single-source tree has exactly one path to every node, so the flow in each
//! pipe follows directly from downstream demand and no simultaneous solve is
//! needed. The engine runs three phases:
//!
//! 1. demand aggregation (post-order over the tree),
//! 2. per-segment hydraulics (friction, fitting losses),
//! 3. pressure propagation from the source (breadth-first),
//!
//! and then extracts the critical path to the lowest-pressure active hydrant.

pub mod calculate;
pub mod critical;
pub mod demand;
pub mod error;
pub mod pressure;
pub mod problem;
pub mod results;
pub mod segments;
pub mod solve;

pub use calculate::{calculate, calculate_many, calculate_unvalidated};
pub use error::{SolverError, SolverResult};
pub use pressure::PressureField;
pub use problem::TreeProblem;
pub use results::{CalculationResult, CriticalPath, NodeResult, SegmentResult};
pub use segments::SegmentState;
pub use solve::{SUCCESS_MESSAGE, TreeSolution, assemble, solve};
