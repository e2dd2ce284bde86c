//! Spherical plume kinematics from the shock state down to the triple point.
//!
//! Radius at each step follows sphere volume scaling against the density at
//! the triple-point column, `r = r0 * (ρ / ρ_tp)^(1/3)`. Each shell is crossed
//! at the constant release velocity of its pressure step.

use crate::error::{ReleaseError, ReleaseResult};
use vp_core::units::{Length, Time, Velocity, km, km_per_s, s};
use vp_eos::IsentropeTable;

/// Last column whose pressure is still below the triple-point pressure.
pub fn triple_point_index(row_pressure_gpa: &[f64], triple_point_gpa: f64) -> Option<usize> {
    row_pressure_gpa.iter().rposition(|&p| p < triple_point_gpa)
}

/// Scaled radii `r0 * (ρ[peak - i] / ρ[tp])^(1/3)` for `i in 0..peak - tp`,
/// most expanded first.
pub(crate) fn scaled_radii(
    density: &[f64],
    peak_index: usize,
    triple_point_index: usize,
    initial_radius_km: f64,
) -> Vec<f64> {
    let rho_tp = density[triple_point_index];
    (0..peak_index - triple_point_index)
        .map(|i| initial_radius_km * (density[peak_index - i] / rho_tp).cbrt())
        .collect()
}

/// State of the plume at the end of one expansion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Isentrope column whose release velocity drove this step.
    pub column: usize,
    pub pressure_gpa: f64,
    pub temperature_k: f64,
    pub density_kg_m3: f64,
    pub velocity_km_s: f64,
    pub radius_km: f64,
    pub step_time_s: f64,
    pub elapsed_s: f64,
}

impl TimeSample {
    pub fn radius(&self) -> Length {
        km(self.radius_km)
    }

    pub fn velocity(&self) -> Velocity {
        km_per_s(self.velocity_km_s)
    }

    pub fn step_time(&self) -> Time {
        s(self.step_time_s)
    }

    pub fn elapsed(&self) -> Time {
        s(self.elapsed_s)
    }
}

/// Expansion timeline in time order, one sample per pressure step between the
/// peak and triple-point columns. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeProfile {
    initial_radius_km: f64,
    samples: Vec<TimeSample>,
}

impl TimeProfile {
    pub fn initial_radius_km(&self) -> f64 {
        self.initial_radius_km
    }

    pub fn samples(&self) -> &[TimeSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn radius_km(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.radius_km).collect()
    }

    pub fn elapsed_s(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.elapsed_s).collect()
    }

    pub fn total_time_s(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.elapsed_s)
    }

    pub fn final_radius_km(&self) -> f64 {
        self.samples
            .last()
            .map_or(self.initial_radius_km, |s| s.radius_km)
    }
}

/// Integrate elapsed time over the steps between `peak_index` and
/// `triple_point_index` using the (repaired) release velocities.
pub fn build_time_profile(
    table: &IsentropeTable,
    entropy_row: usize,
    peak_index: usize,
    triple_point_index: usize,
    initial_radius_km: f64,
    release_velocity_km_s: &[f64],
) -> ReleaseResult<TimeProfile> {
    let row = table.row(entropy_row).ok_or(ReleaseError::InvalidArg {
        what: "isentrope row out of range",
    })?;
    if !(initial_radius_km.is_finite() && initial_radius_km > 0.0) {
        return Err(ReleaseError::InvalidArg {
            what: "initial radius must be positive and finite",
        });
    }
    if triple_point_index >= peak_index {
        return Err(ReleaseError::InvalidArg {
            what: "triple-point column must lie below the peak column",
        });
    }
    if peak_index >= row.len() || peak_index >= release_velocity_km_s.len() {
        return Err(ReleaseError::InvalidArg {
            what: "peak column outside the release profile",
        });
    }

    let radii = scaled_radii(row.density(), peak_index, triple_point_index, initial_radius_km);
    let n = radii.len();

    let mut samples = Vec::with_capacity(n);
    let mut previous = initial_radius_km;
    let mut elapsed = 0.0;
    for step in 0..n {
        let column = peak_index - step;
        let radius = radii[n - 1 - step];
        let velocity = release_velocity_km_s[column];
        let dt = (radius - previous) / velocity;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ReleaseError::InvalidKinematicsStep { step, dt_s: dt });
        }
        elapsed += dt;
        samples.push(TimeSample {
            column,
            pressure_gpa: row.pressure_gpa()[column],
            temperature_k: row.temperature_k()[column],
            density_kg_m3: row.density()[column],
            velocity_km_s: velocity,
            radius_km: radius,
            step_time_s: dt,
            elapsed_s: elapsed,
        });
        previous = radius;
    }

    tracing::debug!(
        steps = n,
        final_radius_km = previous,
        total_time_s = elapsed,
        "built expansion time profile"
    );

    Ok(TimeProfile {
        initial_radius_km,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vp_eos::IsentropeGrid;

    fn table(density: Vec<f64>) -> IsentropeTable {
        let n = density.len();
        IsentropeTable::from_grid(IsentropeGrid {
            entropy: vec![7000.0],
            pressure_gpa: (0..n).map(|i| 10f64.powi(i as i32 - 3)).collect(),
            density,
            temperature_k: vec![2000.0; n],
            energy: vec![0.0; n],
            sound_speed_km_s: vec![1.0; n],
        })
        .unwrap()
    }

    #[test]
    fn triple_point_is_last_column_below() {
        let p = [1e-9, 1e-8, 1e-6, 1e-3];
        assert_eq!(triple_point_index(&p, 5.2e-9), Some(0));
        assert_eq!(triple_point_index(&p, 1e-7), Some(1));
        assert_eq!(triple_point_index(&p, 1e-10), None);
    }

    #[test]
    fn radii_scale_with_cube_root_of_density() {
        let rho = [1.0, 8.0, 27.0, 64.0];
        let r = scaled_radii(&rho, 3, 0, 2.0);
        assert_eq!(r.len(), 3);
        assert!((r[0] - 8.0).abs() < 1e-12);
        assert!((r[1] - 6.0).abs() < 1e-12);
        assert!((r[2] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn time_accumulates_per_step() {
        let t = table(vec![1.0, 8.0, 27.0, 64.0]);
        let v = [2.0, 2.0, 4.0, 1.0];
        let profile = build_time_profile(&t, 0, 3, 0, 1.0, &v).unwrap();
        let s = profile.samples();
        assert_eq!(s.len(), 3);

        // radii 2, 3, 4 km crossed at 1, 4, 2 km/s
        assert_eq!(s[0].column, 3);
        assert!((s[0].step_time_s - 1.0).abs() < 1e-12);
        assert!((s[1].step_time_s - 0.25).abs() < 1e-12);
        assert!((s[2].step_time_s - 0.5).abs() < 1e-12);
        assert!((profile.total_time_s() - 1.75).abs() < 1e-12);
        assert!((profile.final_radius_km() - 4.0).abs() < 1e-12);
        assert_eq!(s[2].column, 1);
        assert_eq!(s[2].pressure_gpa, t.row(0).unwrap().pressure_gpa()[1]);
    }

    #[test]
    fn sample_quantities_are_si() {
        let t = table(vec![1.0, 8.0, 27.0, 64.0]);
        let profile = build_time_profile(&t, 0, 3, 0, 1.0, &[2.0, 2.0, 4.0, 1.0]).unwrap();
        let last = profile.samples()[2];
        assert!((last.radius().value - 4000.0).abs() < 1e-9);
        assert!((last.velocity().value - 2000.0).abs() < 1e-9);
        assert!((last.step_time().value - 0.5).abs() < 1e-12);
        assert!((last.elapsed().value - 1.75).abs() < 1e-12);
    }

    #[test]
    fn constant_density_is_invalid_step() {
        let t = table(vec![5.0; 4]);
        let err = build_time_profile(&t, 0, 3, 0, 1.0, &[1.0; 4]).unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidKinematicsStep { step: 0, .. }));
    }

    #[test]
    fn negative_velocity_is_invalid_step() {
        let t = table(vec![1.0, 8.0, 27.0, 64.0]);
        let err = build_time_profile(&t, 0, 3, 0, 1.0, &[1.0, 1.0, -1.0, 1.0]).unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidKinematicsStep { step: 1, .. }));
    }

    #[test]
    fn argument_checks() {
        let t = table(vec![1.0, 8.0, 27.0, 64.0]);
        assert!(build_time_profile(&t, 0, 2, 2, 1.0, &[1.0; 4]).is_err());
        assert!(build_time_profile(&t, 0, 3, 0, 0.0, &[1.0; 4]).is_err());
        assert!(build_time_profile(&t, 0, 3, 0, 1.0, &[1.0; 3]).is_err());
    }
}
