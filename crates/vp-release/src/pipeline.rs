//! End-to-end release pipeline.

use std::time::Instant;

use crate::error::{ReleaseError, ReleaseResult};
use crate::kinematics::{TimeProfile, build_time_profile, triple_point_index};
use crate::locate::{ShockState, locate_shock_state};
use crate::release::{ReleaseProfile, compute_release_velocities};
use crate::repair::JumpRepair;
use vp_core::SpecEntropy;
use vp_core::units::PA_PER_GPA;
use vp_eos::{HugoniotCurve, IsentropeTable};

/// Triple point of typical silicates [Pa].
pub const SILICATE_TRIPLE_POINT_PA: f64 = 5.2;

/// User inputs for one release calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseParams {
    /// Entropy of the shock state [J/(kg·K)]
    pub target_entropy: SpecEntropy,
    /// Radius of the compressed parcel before release [km]
    pub initial_radius_km: f64,
    /// Pressure where kinematic tracking stops [GPa]
    pub triple_point_pressure_gpa: f64,
}

impl Default for ReleaseParams {
    fn default() -> Self {
        Self {
            target_entropy: 7000.0,
            initial_radius_km: 1.0,
            triple_point_pressure_gpa: SILICATE_TRIPLE_POINT_PA / PA_PER_GPA,
        }
    }
}

impl ReleaseParams {
    pub fn with_triple_point_pa(mut self, pa: f64) -> Self {
        self.triple_point_pressure_gpa = pa / PA_PER_GPA;
        self
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStage {
    Locate,
    Solve,
    Repair,
    Kinematics,
}

impl ReleaseStage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Locate => "Locating shock state",
            Self::Solve => "Integrating release",
            Self::Repair => "Repairing jumps",
            Self::Kinematics => "Building time profile",
        }
    }
}

/// Emitted after each stage completes.
#[derive(Debug, Clone, Copy)]
pub struct StageEvent {
    pub stage: ReleaseStage,
    pub elapsed_s: f64,
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct ReleaseRun {
    pub params: ReleaseParams,
    pub shock: ShockState,
    /// Release velocities as integrated, before repair.
    pub raw_velocity_km_s: Vec<f64>,
    /// Release profile after repair.
    pub release: ReleaseProfile,
    pub repair: JumpRepair,
    pub triple_point_index: usize,
    pub time: TimeProfile,
}

pub fn run_release(
    table: &IsentropeTable,
    hugoniot: &HugoniotCurve,
    params: &ReleaseParams,
) -> ReleaseResult<ReleaseRun> {
    run_release_with_progress(table, hugoniot, params, None)
}

/// Run every stage, reporting each as it finishes. Stops on the first error.
pub fn run_release_with_progress(
    table: &IsentropeTable,
    hugoniot: &HugoniotCurve,
    params: &ReleaseParams,
    mut progress_cb: Option<&mut dyn FnMut(StageEvent)>,
) -> ReleaseResult<ReleaseRun> {
    let mut emit = |stage: ReleaseStage, started: Instant| {
        if let Some(cb) = progress_cb.as_deref_mut() {
            cb(StageEvent {
                stage,
                elapsed_s: started.elapsed().as_secs_f64(),
            });
        }
    };

    let started = Instant::now();
    let shock = locate_shock_state(table, hugoniot, params.target_entropy)?;
    if shock.peak_index == 0 {
        return Err(ReleaseError::PressureNotBracketed {
            what: "release (only one isentrope column)",
            pressure_gpa: shock.hugoniot.pressure_gpa,
        });
    }
    emit(ReleaseStage::Locate, started);

    let started = Instant::now();
    let mut release = compute_release_velocities(
        table,
        shock.entropy_row,
        shock.peak_index,
        shock.hugoniot.particle_velocity_km_s,
        shock.hugoniot.pressure_gpa,
    )?;
    let raw_velocity_km_s = release.velocity_km_s().to_vec();
    emit(ReleaseStage::Solve, started);

    let started = Instant::now();
    let repair = release.repair_jumps();
    emit(ReleaseStage::Repair, started);

    let started = Instant::now();
    let row_pressure = table
        .row(shock.entropy_row)
        .map(|row| row.pressure_gpa())
        .unwrap_or_default();
    let tp_index = triple_point_index(row_pressure, params.triple_point_pressure_gpa).ok_or(
        ReleaseError::PressureNotBracketed {
            what: "triple point",
            pressure_gpa: params.triple_point_pressure_gpa,
        },
    )?;
    let time = build_time_profile(
        table,
        shock.entropy_row,
        shock.peak_index,
        tp_index,
        params.initial_radius_km,
        release.velocity_km_s(),
    )?;
    emit(ReleaseStage::Kinematics, started);

    Ok(ReleaseRun {
        params: *params,
        shock,
        raw_velocity_km_s,
        release,
        repair,
        triple_point_index: tp_index,
        time,
    })
}
