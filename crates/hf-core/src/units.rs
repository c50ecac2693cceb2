// hf-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, VolumeRate as UomVolumeRate,
};
use uom::si::{length, pressure, volume_rate};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    Pressure::new::<pressure::pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    Pressure::new::<pressure::bar>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    Length::new::<length::meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    Length::new::<length::millimeter>(v)
}

#[inline]
pub fn lpm(v: f64) -> VolumeRate {
    VolumeRate::new::<volume_rate::liter_per_minute>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    VolumeRate::new::<volume_rate::cubic_meter_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Scalar conversions between display units and SI.
pub mod convert {
    use super::*;

    /// L/min -> m³/s
    pub fn lpm_to_m3s(v: f64) -> f64 {
        lpm(v).get::<volume_rate::cubic_meter_per_second>()
    }

    /// m³/s -> L/min
    pub fn m3s_to_lpm(v: f64) -> f64 {
        m3ps(v).get::<volume_rate::liter_per_minute>()
    }

    pub fn mm_to_m(v: f64) -> f64 {
        mm(v).get::<length::meter>()
    }

    pub fn pa_to_bar(v: f64) -> f64 {
        pa(v).get::<pressure::bar>()
    }

    pub fn bar_to_pa(v: f64) -> f64 {
        bar(v).get::<pressure::pascal>()
    }

    pub fn bar_to_kpa(v: f64) -> f64 {
        bar(v).get::<pressure::kilopascal>()
    }

    pub fn bar_to_mpa(v: f64) -> f64 {
        bar(v).get::<pressure::megapascal>()
    }
}

pub mod constants {
    /// Gravitational acceleration used for elevation head, m/s².
    pub const GRAVITY_MPS2: f64 = 9.81;
}
