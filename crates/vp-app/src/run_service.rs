//! Release run execution.

use std::path::Path;
use std::time::Instant;

use vp_core::units::PA_PER_GPA;
use vp_project::{RunConfig, validate_run_config};
use vp_release::{
    ReleaseParams, ReleaseRun, ReleaseStage, ShockState, StageEvent, locate_shock_state,
    run_release_with_progress,
};

use crate::error::AppResult;
use crate::project_service::{self, LoadedMaterial};

/// Command-line overrides applied on top of the configuration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOverrides {
    pub target_entropy: Option<f64>,
    pub initial_radius_km: Option<f64>,
    pub triple_point_pressure_pa: Option<f64>,
}

impl RunOverrides {
    /// Apply overrides and re-validate the result.
    pub fn apply(&self, mut config: RunConfig) -> AppResult<RunConfig> {
        if let Some(s) = self.target_entropy {
            config.release.target_entropy_j_per_kg_k = s;
        }
        if let Some(r) = self.initial_radius_km {
            config.release.initial_radius_km = r;
        }
        if let Some(p) = self.triple_point_pressure_pa {
            config.material.triple_point_pressure_pa = p;
        }
        validate_run_config(&config)?;
        Ok(config)
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub config_path: &'a Path,
    pub overrides: RunOverrides,
}

/// Pipeline parameters for a validated configuration.
pub fn release_params(config: &RunConfig) -> ReleaseParams {
    ReleaseParams {
        target_entropy: config.release.target_entropy_j_per_kg_k,
        initial_radius_km: config.release.initial_radius_km,
        triple_point_pressure_gpa: config.material.triple_point_pressure_pa / PA_PER_GPA,
    }
}

/// Run-level stage, wrapping the pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    LoadingTables,
    Release(ReleaseStage),
    Completed,
}

impl RunStage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoadingTables => "Loading tables",
            Self::Release(stage) => stage.label(),
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    /// Wall time spent in `stage`.
    pub stage_time_s: f64,
    /// Wall time since the run started.
    pub elapsed_wall_s: f64,
}

/// Concise timing summary for a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub load_time_s: f64,
    pub locate_time_s: f64,
    pub solve_time_s: f64,
    pub repair_time_s: f64,
    pub kinematics_time_s: f64,
    pub total_time_s: f64,
}

impl RunTimingSummary {
    fn record(&mut self, stage: RunStage, seconds: f64) {
        match stage {
            RunStage::LoadingTables => self.load_time_s += seconds,
            RunStage::Release(ReleaseStage::Locate) => self.locate_time_s += seconds,
            RunStage::Release(ReleaseStage::Solve) => self.solve_time_s += seconds,
            RunStage::Release(ReleaseStage::Repair) => self.repair_time_s += seconds,
            RunStage::Release(ReleaseStage::Kinematics) => self.kinematics_time_s += seconds,
            RunStage::Completed => {}
        }
    }
}

/// Response from a completed run.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub config: RunConfig,
    pub material: LoadedMaterial,
    pub run: ReleaseRun,
    pub timing: RunTimingSummary,
}

fn prepare(request: &RunRequest) -> AppResult<(RunConfig, LoadedMaterial)> {
    let config = project_service::load_config(request.config_path)?;
    let config = request.overrides.apply(config)?;
    let material = project_service::load_material(request.config_path, &config)?;
    Ok((config, material))
}

/// Load tables and locate the shock state only.
pub fn locate(request: &RunRequest) -> AppResult<(RunConfig, LoadedMaterial, ShockState)> {
    let (config, material) = prepare(request)?;
    let shock = locate_shock_state(
        &material.isentrope,
        &material.hugoniot,
        config.release.target_entropy_j_per_kg_k,
    )?;
    Ok((config, material, shock))
}

pub fn execute(request: &RunRequest) -> AppResult<RunResponse> {
    execute_with_progress(request, None)
}

/// Execute a full run and stream stage events.
pub fn execute_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let span = tracing::info_span!("release_run", config = %request.config_path.display());
    let _guard = span.enter();

    let started = Instant::now();
    let mut timing = RunTimingSummary::default();
    let mut emit = |stage: RunStage, stage_time_s: f64, timing: &mut RunTimingSummary| {
        timing.record(stage, stage_time_s);
        if let Some(cb) = progress_cb.as_deref_mut() {
            cb(RunProgressEvent {
                stage,
                stage_time_s,
                elapsed_wall_s: started.elapsed().as_secs_f64(),
            });
        }
    };

    let load_start = Instant::now();
    let (config, material) = prepare(request)?;
    emit(
        RunStage::LoadingTables,
        load_start.elapsed().as_secs_f64(),
        &mut timing,
    );

    let params = release_params(&config);
    let run = run_release_with_progress(
        &material.isentrope,
        &material.hugoniot,
        &params,
        Some(&mut |event: StageEvent| {
            emit(RunStage::Release(event.stage), event.elapsed_s, &mut timing)
        }),
    )?;

    timing.total_time_s = started.elapsed().as_secs_f64();
    emit(RunStage::Completed, 0.0, &mut timing);

    tracing::info!(
        steps = run.time.len(),
        total_time_s = run.time.total_time_s(),
        final_radius_km = run.time.final_radius_km(),
        jump_flattened = run.repair.flattened(),
        "release run complete"
    );

    Ok(RunResponse {
        config,
        material,
        run,
        timing,
    })
}
