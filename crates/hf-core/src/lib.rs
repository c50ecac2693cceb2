//! hf-core: stable foundation for hydrantflow.
//!
//! Contains:
//! - units (uom SI types, constructors and display-unit conversions)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact IDs for graph objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HfError, HfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
