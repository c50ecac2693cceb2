//! Kinematics of full-bore pipe flow.

use std::f64::consts::PI;

/// Cross-sectional area of a circular bore, m².
pub fn flow_area(diameter_m: f64) -> f64 {
    PI * (diameter_m / 2.0).powi(2)
}

/// Mean velocity for volumetric flow `flow_m3s` through diameter `diameter_m`.
///
/// Returns 0 for a non-positive diameter.
pub fn velocity(flow_m3s: f64, diameter_m: f64) -> f64 {
    if diameter_m <= 0.0 {
        return 0.0;
    }
    flow_m3s / flow_area(diameter_m)
}

/// Reynolds number ρvD/μ.
///
/// Returns 0 when either the velocity or the diameter is zero.
pub fn reynolds(velocity: f64, diameter_m: f64, density: f64, viscosity: f64) -> f64 {
    if velocity == 0.0 || diameter_m == 0.0 {
        return 0.0;
    }
    density * velocity * diameter_m / viscosity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reynolds_typical_water() {
        // 100 mm pipe, 1 m/s, water at 20 °C
        let re = reynolds(1.0, 0.1, 998.0, 0.001002);
        assert!(re > 99_000.0 && re < 100_000.0);
    }

    #[test]
    fn reynolds_zero_guards() {
        assert_eq!(reynolds(0.0, 0.1, 998.0, 0.001), 0.0);
        assert_eq!(reynolds(1.0, 0.0, 998.0, 0.001), 0.0);
    }

    #[test]
    fn velocity_from_flow() {
        let v = velocity(0.01, 0.1);
        let expected = 0.01 / (PI * 0.05_f64.powi(2));
        assert!((v - expected).abs() < 1e-12);
    }

    #[test]
    fn velocity_zero_diameter() {
        assert_eq!(velocity(1.0, 0.0), 0.0);
        assert_eq!(velocity(1.0, -0.1), 0.0);
    }
}
