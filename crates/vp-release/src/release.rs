//! Isentropic release velocity from the simple-wave (Riemann) relation.
//!
//! Along the isentrope, `du = -dP / (ρ c)`. Starting from the Hugoniot
//! particle velocity at the shock pressure,
//!
//! ```text
//! u(P_k) = u_p - ∫_{P_H}^{P_k} dP / (ρ c)
//! ```
//!
//! The integrand is interpolated linearly in pressure over the whole row.

use crate::error::{ReleaseError, ReleaseResult};
use crate::interp::LinearInterpolant;
use crate::repair::{JumpRepair, repair_jumps};
use vp_core::units::{M_PER_KM, PA_PER_GPA};
use vp_eos::{IsentropeRow, IsentropeTable};

/// Release velocity per isentrope column, from column 0 up to the peak column.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseProfile {
    pressure_gpa: Vec<f64>,
    velocity_km_s: Vec<f64>,
}

impl ReleaseProfile {
    pub fn peak_index(&self) -> usize {
        self.velocity_km_s.len() - 1
    }

    pub fn len(&self) -> usize {
        self.velocity_km_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocity_km_s.is_empty()
    }

    pub fn pressure_gpa(&self) -> &[f64] {
        &self.pressure_gpa
    }

    pub fn velocity_km_s(&self) -> &[f64] {
        &self.velocity_km_s
    }

    /// Flatten the tension-boundary artifact in place.
    pub fn repair_jumps(&mut self) -> JumpRepair {
        let peak = self.peak_index();
        repair_jumps(&mut self.velocity_km_s, peak)
    }
}

/// Inverse acoustic impedance `1 / (ρ c)` in SI, keyed by pressure in Pa.
fn inverse_impedance(row: &IsentropeRow<'_>) -> ReleaseResult<LinearInterpolant> {
    let knots = row
        .pressure_gpa()
        .iter()
        .zip(row.density())
        .zip(row.sound_speed_km_s())
        .map(|((&p, &rho), &cs)| (p * PA_PER_GPA, 1.0 / (rho * cs * M_PER_KM)));
    let f = LinearInterpolant::new(knots)?;
    if f.dropped() > 0 {
        tracing::warn!(
            row = row.index(),
            dropped = f.dropped(),
            "dropped non-finite impedance knots from isentrope"
        );
    }
    Ok(f)
}

/// Release velocity for every column `0..=peak_index` of isentrope `entropy_row`.
///
/// Column 0 is not integrated; it copies column 1.
pub fn compute_release_velocities(
    table: &IsentropeTable,
    entropy_row: usize,
    peak_index: usize,
    hugoniot_particle_velocity_km_s: f64,
    hugoniot_pressure_gpa: f64,
) -> ReleaseResult<ReleaseProfile> {
    let row = table.row(entropy_row).ok_or(ReleaseError::InvalidArg {
        what: "isentrope row out of range",
    })?;
    if peak_index == 0 || peak_index >= row.len() {
        return Err(ReleaseError::InvalidArg {
            what: "peak index must lie in 1..columns",
        });
    }

    let f = inverse_impedance(&row)?;
    let p_shock = hugoniot_pressure_gpa * PA_PER_GPA;
    let up_shock = hugoniot_particle_velocity_km_s * M_PER_KM;
    let pressure = row.pressure_gpa();

    let mut velocity = vec![0.0; peak_index + 1];
    for k in (1..=peak_index).rev() {
        let integral = f.integrate(p_shock, pressure[k] * PA_PER_GPA)?;
        velocity[k] = (up_shock - integral) / M_PER_KM;
    }
    velocity[0] = velocity[1];

    tracing::debug!(
        row = entropy_row,
        peak_index,
        release_velocity_km_s = velocity[1],
        "computed release velocities"
    );

    Ok(ReleaseProfile {
        pressure_gpa: pressure[..=peak_index].to_vec(),
        velocity_km_s: velocity,
    })
}
