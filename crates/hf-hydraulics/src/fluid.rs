//! Constant-property incompressible liquid.

use hf_core::numeric::ensure_positive;
use hf_core::units::{Density, DynVisc, kgpm3, pas};

use crate::error::HydraulicsResult;

/// Default density: water at 20 °C, kg/m³.
pub const WATER_20C_DENSITY: f64 = 998.0;

/// Default dynamic viscosity: water at 20 °C, Pa·s.
pub const WATER_20C_VISCOSITY: f64 = 1.002e-3;

/// Fluid with fixed density and dynamic viscosity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluid {
    pub density: Density,
    pub viscosity: DynVisc,
}

impl Fluid {
    /// Create a fluid, rejecting non-positive or non-finite properties.
    pub fn new(density_kg_m3: f64, viscosity_pa_s: f64) -> HydraulicsResult<Self> {
        let rho = ensure_positive(density_kg_m3, "density")?;
        let mu = ensure_positive(viscosity_pa_s, "viscosity")?;
        Ok(Self {
            density: kgpm3(rho),
            viscosity: pas(mu),
        })
    }

    pub fn water_20c() -> Self {
        Self {
            density: kgpm3(WATER_20C_DENSITY),
            viscosity: pas(WATER_20C_VISCOSITY),
        }
    }
}

impl Default for Fluid {
    fn default() -> Self {
        Self::water_20c()
    }
}
