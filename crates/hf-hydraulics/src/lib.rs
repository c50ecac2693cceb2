//! hf-hydraulics: incompressible pipe-flow primitives.
//!
//! Provides the building blocks the tree engine composes per segment:
//! - Flow kinematics (area, velocity, Reynolds number)
//! - Darcy friction factor (laminar, Swamee-Jain, Colebrook-White)
//! - Major, minor and elevation pressure changes
//! - Constant-property fluid and a pipe segment that ties them together
//!
//! # Example
//!
//! ```
//! use hf_hydraulics::{Fluid, FrictionModel, PipeSegment};
//! use hf_core::units::{lpm, m, mm};
//!
//! let pipe = PipeSegment::new("P1".into(), m(100.0), mm(100.0), mm(0.045), 2.5);
//! let h = pipe
//!     .evaluate(lpm(500.0), &Fluid::default(), FrictionModel::SwameeJain)
//!     .unwrap();
//!
//! assert!(h.total_loss().value > 0.0);
//! println!("Regime: {}", h.regime);
//! ```

pub mod common;
pub mod error;
pub mod fittings;
pub mod flow;
pub mod fluid;
pub mod friction;
pub mod losses;
pub mod pipe;

// Re-exports
pub use error::{HydraulicsError, HydraulicsResult};
pub use fittings::{K_FACTORS, k_factor};
pub use flow::{flow_area, reynolds, velocity};
pub use fluid::Fluid;
pub use friction::{
    ColebrookSolution, FlowRegime, FrictionFactor, FrictionModel, colebrook_white,
    colebrook_white_detailed, friction_factor, laminar, swamee_jain,
};
pub use losses::{elevation_loss, major_loss, minor_loss};
pub use pipe::{PipeSegment, SegmentHydraulics};
