//! Standard minor-loss coefficients for common fittings.

/// Catalogue of fitting K factors, keyed by component type name.
pub const K_FACTORS: &[(&str, f64)] = &[
    ("gate_valve_open", 0.2),
    ("gate_valve_half", 5.6),
    ("globe_valve_open", 10.0),
    ("ball_valve_open", 0.05),
    ("check_valve_swing", 2.5),
    ("butterfly_valve_open", 0.3),
    ("elbow_90_standard", 0.9),
    ("elbow_90_long_radius", 0.6),
    ("elbow_45", 0.4),
    ("tee_run", 0.3),
    ("tee_branch", 1.0),
    ("reducer_sudden", 0.5),
    ("expander_sudden", 1.0),
    ("entrance_sharp", 0.5),
    ("entrance_rounded", 0.25),
    ("exit", 1.0),
    ("hydrant_outlet", 2.5),
];

/// Look up the K factor for a fitting type.
pub fn k_factor(name: &str) -> Option<f64> {
    K_FACTORS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|&(_, k)| k)
}
