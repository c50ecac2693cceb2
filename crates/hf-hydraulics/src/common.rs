//! Common utilities for hydraulic calculations.

use crate::error::{HydraulicsError, HydraulicsResult};
use hf_core::numeric::ensure_finite;

/// Ensure a value is finite, returning HydraulicsError if not.
pub fn check_finite(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    ensure_finite(value, what).map_err(|_| HydraulicsError::NonPhysical { what })
}

/// Dynamic pressure ρv²/2 in Pa.
pub fn dynamic_pressure(density: f64, velocity: f64) -> f64 {
    0.5 * density * velocity.powi(2)
}
