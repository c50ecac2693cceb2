//! Error types for solver operations.

use hf_core::error::HfError;
use hf_graph::GraphError;
use hf_hydraulics::HydraulicsError;
use thiserror::Error;

/// Errors that can occur while solving a tree network.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Invalid state: {what}")]
    InvalidState { what: String },

    #[error("Hydraulics error: {0}")]
    Hydraulics(#[from] HydraulicsError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for HfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Hydraulics(inner) => inner.into(),
            SolverError::Graph(inner) => inner.into(),
            other => HfError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
