//! Pipe segment with Darcy-Weisbach friction and lumped fitting losses.

use hf_core::units::{Length, Pressure, VolumeRate, pa};
use uom::si::dynamic_viscosity::pascal_second;
use uom::si::length::meter;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::volume_rate::cubic_meter_per_second;

use crate::common::check_finite;
use crate::error::HydraulicsResult;
use crate::flow::{reynolds, velocity};
use crate::fluid::Fluid;
use crate::friction::{FlowRegime, FrictionModel, friction_factor};
use crate::losses::{major_loss, minor_loss};

/// Straight pipe run with fittings.
///
/// Computes the pressure drop for a known volumetric flow; in a tree network
/// the flow of every segment is known from the downstream demand, so no
/// inversion is needed.
#[derive(Debug, Clone)]
pub struct PipeSegment {
    name: String,
    /// Pipe length
    pub length: Length,
    /// Pipe inner diameter
    pub diameter: Length,
    /// Surface roughness (absolute)
    pub roughness: Length,
    /// Minor loss coefficient (sum of K factors for fittings, bends, etc.)
    pub k_minor: f64,
}

/// Hydraulic state of a segment at a given flow. Losses in Pa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHydraulics {
    pub velocity_mps: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub regime: FlowRegime,
    pub major_loss: Pressure,
    pub minor_loss: Pressure,
    /// False only when a Colebrook solve hit its iteration cap.
    pub converged: bool,
}

impl SegmentHydraulics {
    pub fn total_loss(&self) -> Pressure {
        self.major_loss + self.minor_loss
    }
}

impl PipeSegment {
    /// Create a new pipe segment.
    pub fn new(
        name: String,
        length: Length,
        diameter: Length,
        roughness: Length,
        k_minor: f64,
    ) -> Self {
        Self {
            name,
            length,
            diameter,
            roughness,
            k_minor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate velocity, Reynolds number, friction factor and losses at `flow`.
    ///
    /// Zero flow yields losses of exactly 0 Pa regardless of the correlations.
    pub fn evaluate(
        &self,
        flow: VolumeRate,
        fluid: &Fluid,
        model: FrictionModel,
    ) -> HydraulicsResult<SegmentHydraulics> {
        let q = flow.get::<cubic_meter_per_second>();
        let d = self.diameter.get::<meter>();
        let rho = fluid.density.get::<kilogram_per_cubic_meter>();
        let mu = fluid.viscosity.get::<pascal_second>();

        let v = check_finite(velocity(q, d), "velocity")?;
        let re = check_finite(reynolds(v, d, rho, mu), "Reynolds number")?;
        let f = friction_factor(re, self.roughness.get::<meter>(), d, model);
        let friction = check_finite(f.value, "friction factor")?;

        let (major, minor) = if q > 0.0 {
            (
                check_finite(major_loss(friction, self.length.get::<meter>(), d, v, rho), "major loss")?,
                check_finite(minor_loss(self.k_minor, v, rho), "minor loss")?,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(SegmentHydraulics {
            velocity_mps: v,
            reynolds: re,
            friction_factor: friction,
            regime: f.regime,
            major_loss: pa(major),
            minor_loss: pa(minor),
            converged: f.converged,
        })
    }
}
