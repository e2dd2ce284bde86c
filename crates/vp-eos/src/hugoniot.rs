//! Hugoniot curve: locus of shock states.

use crate::error::{EosError, EosResult};
use vp_core::units::{Density, Pressure, Temperature, Velocity, gpa, k, kg_per_m3, km_per_s};
use vp_core::{SpecEnergy, SpecEntropy, ensure_finite};

/// One tabulated shock state, in loaded units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HugoniotPoint {
    pub temperature_k: f64,
    pub density_kg_m3: f64,
    pub pressure_gpa: f64,
    pub energy: SpecEnergy,
    pub entropy: SpecEntropy,
    pub particle_velocity_km_s: f64,
    pub shock_velocity_km_s: f64,
}

impl HugoniotPoint {
    pub fn pressure(&self) -> Pressure {
        gpa(self.pressure_gpa)
    }

    pub fn temperature(&self) -> Temperature {
        k(self.temperature_k)
    }

    pub fn density(&self) -> Density {
        kg_per_m3(self.density_kg_m3)
    }

    pub fn particle_velocity(&self) -> Velocity {
        km_per_s(self.particle_velocity_km_s)
    }

    pub fn shock_velocity(&self) -> Velocity {
        km_per_s(self.shock_velocity_km_s)
    }
}

/// Hugoniot stored column-wise so each axis can be searched as a slice.
#[derive(Debug, Clone, Default)]
pub struct HugoniotCurve {
    temperature_k: Vec<f64>,
    density_kg_m3: Vec<f64>,
    pressure_gpa: Vec<f64>,
    energy: Vec<SpecEnergy>,
    entropy: Vec<SpecEntropy>,
    particle_velocity_km_s: Vec<f64>,
    shock_velocity_km_s: Vec<f64>,
}

impl HugoniotCurve {
    pub fn from_points(points: impl IntoIterator<Item = HugoniotPoint>) -> EosResult<Self> {
        let mut curve = Self::default();
        for p in points {
            ensure_finite(p.pressure_gpa, "hugoniot pressure")?;
            ensure_finite(p.entropy, "hugoniot entropy")?;
            ensure_finite(p.particle_velocity_km_s, "hugoniot particle velocity")?;
            curve.temperature_k.push(p.temperature_k);
            curve.density_kg_m3.push(p.density_kg_m3);
            curve.pressure_gpa.push(p.pressure_gpa);
            curve.energy.push(p.energy);
            curve.entropy.push(p.entropy);
            curve.particle_velocity_km_s.push(p.particle_velocity_km_s);
            curve.shock_velocity_km_s.push(p.shock_velocity_km_s);
        }
        if curve.is_empty() {
            return Err(EosError::malformed("hugoniot", "no shock states"));
        }
        Ok(curve)
    }

    pub fn len(&self) -> usize {
        self.entropy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entropy.is_empty()
    }

    pub fn point(&self, i: usize) -> Option<HugoniotPoint> {
        (i < self.len()).then(|| HugoniotPoint {
            temperature_k: self.temperature_k[i],
            density_kg_m3: self.density_kg_m3[i],
            pressure_gpa: self.pressure_gpa[i],
            energy: self.energy[i],
            entropy: self.entropy[i],
            particle_velocity_km_s: self.particle_velocity_km_s[i],
            shock_velocity_km_s: self.shock_velocity_km_s[i],
        })
    }

    pub fn entropy(&self) -> &[SpecEntropy] {
        &self.entropy
    }

    pub fn pressure_gpa(&self) -> &[f64] {
        &self.pressure_gpa
    }

    pub fn temperature_k(&self) -> &[f64] {
        &self.temperature_k
    }

    pub fn density_kg_m3(&self) -> &[f64] {
        &self.density_kg_m3
    }

    pub fn particle_velocity_km_s(&self) -> &[f64] {
        &self.particle_velocity_km_s
    }

    pub fn shock_velocity_km_s(&self) -> &[f64] {
        &self.shock_velocity_km_s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(s: f64, p: f64) -> HugoniotPoint {
        HugoniotPoint {
            temperature_k: 5000.0,
            density_kg_m3: 5000.0,
            pressure_gpa: p,
            energy: 1.0e7,
            entropy: s,
            particle_velocity_km_s: 6.0,
            shock_velocity_km_s: 12.0,
        }
    }

    #[test]
    fn columns_follow_insert_order() {
        let curve =
            HugoniotCurve::from_points([point(5000.0, 50.0), point(7000.0, 150.0)]).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.entropy(), &[5000.0, 7000.0]);
        assert_eq!(curve.point(1).unwrap().pressure_gpa, 150.0);
        assert!(curve.point(2).is_none());
    }

    #[test]
    fn empty_curve_is_malformed() {
        assert!(HugoniotCurve::from_points(Vec::new()).is_err());
    }

    #[test]
    fn quantities_are_si() {
        let p = point(7000.0, 100.0);
        assert!((p.pressure().value - 100.0e9).abs() < 1.0);
        assert!((p.particle_velocity().value - 6000.0).abs() < 1e-9);
    }
}
