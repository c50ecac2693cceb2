//! Pressure-loss formulas, all in Pa.

use hf_core::units::constants::GRAVITY_MPS2;

use crate::common::dynamic_pressure;

/// Darcy-Weisbach friction loss `f·(L/D)·(ρv²/2)`; 0 for a non-positive diameter.
pub fn major_loss(
    friction_factor: f64,
    length_m: f64,
    diameter_m: f64,
    velocity: f64,
    density: f64,
) -> f64 {
    if diameter_m <= 0.0 {
        return 0.0;
    }
    friction_factor * (length_m / diameter_m) * dynamic_pressure(density, velocity)
}

/// Fitting loss `K·(ρv²/2)`.
pub fn minor_loss(k_total: f64, velocity: f64, density: f64) -> f64 {
    k_total * dynamic_pressure(density, velocity)
}

/// Static pressure change `ρ·g·Δz` for `delta_z_m` = downstream − upstream elevation.
///
/// Positive when the pipe rises (pressure is consumed), negative when it falls.
pub fn elevation_loss(delta_z_m: f64, density: f64) -> f64 {
    density * GRAVITY_MPS2 * delta_z_m
}
