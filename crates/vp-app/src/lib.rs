//! Shared application service layer for vaporplume.
//!
//! Loads run configurations and EOS tables, drives the release pipeline with
//! stage timing, and extracts plot-ready series for front ends.

pub mod error;
pub mod project_service;
pub mod query;
pub mod run_service;

pub use error::{AppError, AppResult};
pub use project_service::{LoadedMaterial, load_config, load_material, resolve_table_path};
pub use query::{RunSummary, Series, SeriesKind, extract_series, get_run_summary};
pub use run_service::{
    RunOverrides, RunProgressEvent, RunRequest, RunResponse, RunStage, RunTimingSummary,
    execute, execute_with_progress, locate,
};
