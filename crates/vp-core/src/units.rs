// vp-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

/// Specific internal energy [J/kg].
pub type SpecEnergy = f64;

#[inline]
pub fn gpa(v: f64) -> Pressure {
    use uom::si::pressure::gigapascal;
    Pressure::new::<gigapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn km_per_s(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_second;
    Velocity::new::<kilometer_per_second>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn to_gpa(p: Pressure) -> f64 {
    use uom::si::pressure::gigapascal;
    p.get::<gigapascal>()
}

/// Pa per GPa, for the triple-point constant and the Riemann integral.
pub const PA_PER_GPA: f64 = 1.0e9;

/// m/s per km/s.
pub const M_PER_KM: f64 = 1.0e3;

/// Multipliers that take material-model (CGS) table columns to SI/GPa.
pub mod cgs {
    /// dyn/cm² → GPa
    pub const DYN_PER_CM2_TO_GPA: f64 = 1.0e-10;
    /// g/cm³ → kg/m³
    pub const G_PER_CM3_TO_KG_PER_M3: f64 = 1.0e3;
    /// erg/(g·K) → J/(kg·K)
    pub const ERG_PER_G_K_TO_J_PER_KG_K: f64 = 1.0e-4;
    /// erg/g → J/kg
    pub const ERG_PER_G_TO_J_PER_KG: f64 = 1.0e-4;
    /// cm/s → km/s
    pub const CM_PER_S_TO_KM_PER_S: f64 = 1.0e-5;
    /// MJ/kg → J/kg
    pub const MJ_PER_KG_TO_J_PER_KG: f64 = 1.0e6;
    /// MJ/(kg·K) → J/(kg·K)
    pub const MJ_PER_KG_K_TO_J_PER_KG_K: f64 = 1.0e6;
}
