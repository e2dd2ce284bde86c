//! Shock-state location on the Hugoniot and the isentrope table.

use std::fmt;

use crate::error::{ReleaseError, ReleaseResult};
use vp_core::units::{Density, Pressure, Temperature, Velocity, gpa, to_gpa};
use vp_core::SpecEntropy;
use vp_eos::{HugoniotCurve, HugoniotPoint, IsentropeTable};

/// Index of the tabulated value nearest `target` among the adjacent pair
/// that brackets it.
///
/// Works for increasing and decreasing sequences. An exact match is returned
/// directly, so a one-entry axis holding `target` is valid. On a tie the
/// entry above `target` wins. `None` if no pair brackets `target`.
pub fn nearest_bracketed_index<T>(values: &[T], target: f64) -> Option<usize>
where
    T: Copy + Into<f64>,
{
    if !target.is_finite() {
        return None;
    }
    let at = |i: usize| -> f64 { values[i].into() };

    if let Some(i) = (0..values.len()).find(|&i| at(i) == target) {
        return Some(i);
    }

    let lo = (0..values.len().saturating_sub(1)).find(|&i| {
        let (a, b) = (at(i), at(i + 1));
        (a < target && target < b) || (b < target && target < a)
    })?;
    let hi = lo + 1;

    let d_lo = (at(lo) - target).abs();
    let d_hi = (at(hi) - target).abs();
    let pick = if d_lo < d_hi {
        lo
    } else if d_hi < d_lo {
        hi
    } else if at(lo) > target {
        lo
    } else {
        hi
    };
    Some(pick)
}

/// Last isentrope column whose pressure is still below the Hugoniot pressure.
pub fn peak_pressure_index(row_pressure_gpa: &[f64], hugoniot_pressure_gpa: f64) -> Option<usize> {
    row_pressure_gpa
        .iter()
        .rposition(|&p| p < hugoniot_pressure_gpa)
}

/// Read-only description of the located shock state, for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockSummary {
    pub target_entropy: SpecEntropy,
    pub isentrope_entropy: SpecEntropy,
    pub hugoniot_entropy: SpecEntropy,
    pub peak_pressure: Pressure,
    pub peak_temperature: Temperature,
    pub peak_density: Density,
    pub shock_velocity: Velocity,
    pub particle_velocity: Velocity,
    /// Isentrope pressure at the peak column, just below the Hugoniot pressure.
    pub isentrope_peak_pressure: Pressure,
}

impl fmt::Display for ShockSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use uom::si::mass_density::kilogram_per_cubic_meter;
        use uom::si::thermodynamic_temperature::kelvin;
        use uom::si::velocity::kilometer_per_second;

        writeln!(
            f,
            "Shock state for entropy = {} J/K/kg",
            self.target_entropy
        )?;
        writeln!(f, "  Peak pressure          = {:.4} GPa", to_gpa(self.peak_pressure))?;
        writeln!(
            f,
            "  Peak temperature       = {:.1} K",
            self.peak_temperature.get::<kelvin>()
        )?;
        writeln!(
            f,
            "  Peak density           = {:.1} kg/m^3",
            self.peak_density.get::<kilogram_per_cubic_meter>()
        )?;
        writeln!(
            f,
            "  Shock velocity         = {:.4} km/s",
            self.shock_velocity.get::<kilometer_per_second>()
        )?;
        writeln!(
            f,
            "  Particle velocity      = {:.4} km/s",
            self.particle_velocity.get::<kilometer_per_second>()
        )?;
        write!(
            f,
            "  Isentrope peak pressure = {:.4} GPa",
            to_gpa(self.isentrope_peak_pressure)
        )
    }
}

/// Indices selected for one target entropy. Immutable once located.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockState {
    pub entropy_row: usize,
    pub hugoniot_index: usize,
    pub peak_index: usize,
    pub hugoniot: HugoniotPoint,
    pub summary: ShockSummary,
}

/// Find the isentrope row and Hugoniot state nearest `target_entropy`, and the
/// isentrope column where release begins.
pub fn locate_shock_state(
    table: &IsentropeTable,
    hugoniot: &HugoniotCurve,
    target_entropy: SpecEntropy,
) -> ReleaseResult<ShockState> {
    let entropy_row = nearest_bracketed_index(table.entropy(), target_entropy).ok_or(
        ReleaseError::EntropyOutOfRange {
            axis: "isentrope",
            target: target_entropy,
        },
    )?;
    let hugoniot_index = nearest_bracketed_index(hugoniot.entropy(), target_entropy).ok_or(
        ReleaseError::EntropyOutOfRange {
            axis: "hugoniot",
            target: target_entropy,
        },
    )?;

    let shock = hugoniot
        .point(hugoniot_index)
        .ok_or(ReleaseError::InvalidArg {
            what: "hugoniot index out of range",
        })?;
    let row = table.row(entropy_row).ok_or(ReleaseError::InvalidArg {
        what: "isentrope row out of range",
    })?;

    let peak_index = peak_pressure_index(row.pressure_gpa(), shock.pressure_gpa).ok_or(
        ReleaseError::PressureNotBracketed {
            what: "isentrope peak",
            pressure_gpa: shock.pressure_gpa,
        },
    )?;

    let summary = ShockSummary {
        target_entropy,
        isentrope_entropy: row.entropy(),
        hugoniot_entropy: shock.entropy,
        peak_pressure: shock.pressure(),
        peak_temperature: shock.temperature(),
        peak_density: shock.density(),
        shock_velocity: shock.shock_velocity(),
        particle_velocity: shock.particle_velocity(),
        isentrope_peak_pressure: gpa(row.pressure_gpa()[peak_index]),
    };

    tracing::info!(
        target_entropy,
        entropy_row,
        hugoniot_index,
        peak_index,
        peak_pressure_gpa = shock.pressure_gpa,
        particle_velocity_km_s = shock.particle_velocity_km_s,
        "located shock state"
    );

    Ok(ShockState {
        entropy_row,
        hugoniot_index,
        peak_index,
        hugoniot: shock,
        summary,
    })
}
