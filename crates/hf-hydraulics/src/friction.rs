//! Darcy friction factor correlations.
//!
//! The regime is gated on the Reynolds number: below [`LAMINAR_LIMIT_RE`] the
//! Hagen-Poiseuille result `64/Re` applies, otherwise one of the turbulent
//! correlations selected by [`FrictionModel`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_LIMIT_RE: f64 = 2300.0;

/// Convergence tolerance on successive Colebrook-White iterates.
pub const COLEBROOK_TOLERANCE: f64 = 1e-6;

/// Iteration cap for the Colebrook-White solve.
pub const COLEBROOK_MAX_ITERATIONS: usize = 50;

/// Flow regime label attached to segment results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT_RE {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "laminar",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Turbulent friction correlation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionModel {
    /// Explicit Swamee-Jain approximation.
    #[default]
    SwameeJain,
    /// Implicit Colebrook-White equation solved by Newton-Raphson.
    Colebrook,
}

/// Laminar friction factor `64/Re`; 0 for non-positive Re.
pub fn laminar(reynolds: f64) -> f64 {
    if reynolds <= 0.0 {
        return 0.0;
    }
    64.0 / reynolds
}

/// Swamee-Jain explicit friction factor.
///
/// `f = 0.25 / [log10(ε/(3.7D) + 5.74/Re^0.9)]²`
///
/// Stated validity is 5000 ≤ Re ≤ 1e8 and 1e-6 ≤ ε/D ≤ 1e-2; inputs outside
/// that window are evaluated anyway.
pub fn swamee_jain(reynolds: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    if reynolds <= 0.0 || diameter_m <= 0.0 {
        return 0.0;
    }
    let relative_roughness = roughness_m / diameter_m;
    let a = relative_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Outcome of the Colebrook-White iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookSolution {
    pub factor: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Colebrook-White friction factor with convergence details.
///
/// Solves `F(f) = 1/√f + 2·log10(ε/(3.7D) + 2.51/(Re√f)) = 0` by Newton-Raphson
/// seeded from Swamee-Jain. When the iteration cap is hit the last iterate is
/// returned with `converged == false`.
pub fn colebrook_white_detailed(
    reynolds: f64,
    roughness_m: f64,
    diameter_m: f64,
) -> ColebrookSolution {
    if reynolds <= 0.0 || diameter_m <= 0.0 {
        return ColebrookSolution {
            factor: 0.0,
            iterations: 0,
            converged: true,
        };
    }

    let relative_roughness = roughness_m / diameter_m;
    let mut f = swamee_jain(reynolds, roughness_m, diameter_m);

    for iteration in 1..=COLEBROOK_MAX_ITERATIONS {
        let sqrt_f = f.sqrt();
        let term = relative_roughness / 3.7 + 2.51 / (reynolds * sqrt_f);
        let residual = 1.0 / sqrt_f + 2.0 * term.log10();
        let slope = -0.5 / (f * sqrt_f)
            - 2.51 / (reynolds * f * sqrt_f * term * std::f64::consts::LN_10);

        let f_new = f - residual / slope;

        if (f_new - f).abs() < COLEBROOK_TOLERANCE {
            return ColebrookSolution {
                factor: f_new,
                iterations: iteration,
                converged: true,
            };
        }

        f = f_new;
    }

    ColebrookSolution {
        factor: f,
        iterations: COLEBROOK_MAX_ITERATIONS,
        converged: false,
    }
}

/// Colebrook-White friction factor (best effort, see [`colebrook_white_detailed`]).
pub fn colebrook_white(reynolds: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    colebrook_white_detailed(reynolds, roughness_m, diameter_m).factor
}

/// Friction factor together with the regime that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFactor {
    pub value: f64,
    pub regime: FlowRegime,
    /// False only when a Colebrook solve hit its iteration cap.
    pub converged: bool,
}

/// Regime-gated Darcy friction factor.
pub fn friction_factor(
    reynolds: f64,
    roughness_m: f64,
    diameter_m: f64,
    model: FrictionModel,
) -> FrictionFactor {
    match FlowRegime::from_reynolds(reynolds) {
        FlowRegime::Laminar => FrictionFactor {
            value: laminar(reynolds),
            regime: FlowRegime::Laminar,
            converged: true,
        },
        FlowRegime::Turbulent => {
            let (value, converged) = match model {
                FrictionModel::SwameeJain => {
                    (swamee_jain(reynolds, roughness_m, diameter_m), true)
                }
                FrictionModel::Colebrook => {
                    let sol = colebrook_white_detailed(reynolds, roughness_m, diameter_m);
                    (sol.factor, sol.converged)
                }
            };
            FrictionFactor {
                value,
                regime: FlowRegime::Turbulent,
                converged,
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use hf_core::numeric::relative_difference;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn correlations_agree_in_turbulent_range(
            re in 5_000.0_f64..1e8,
            rel_rough in 1e-6_f64..1e-2,
        ) {
            let d = 0.1;
            let sj = swamee_jain(re, rel_rough * d, d);
            let cw = colebrook_white_detailed(re, rel_rough * d, d);
            prop_assert!(cw.converged);
            prop_assert!(relative_difference(sj, cw.factor) < 0.03);
        }
    }
}
