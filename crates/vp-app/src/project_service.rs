//! Configuration and table loading.

use std::path::{Path, PathBuf};

use vp_eos::{
    DEFAULT_HUGONIOT_HEADER_ROWS, DEFAULT_ISENTROPE_HEADER_ROWS, HugoniotCurve, IsentropeTable,
    load_hugoniot, load_isentrope,
};
use vp_project::RunConfig;

use crate::error::{AppError, AppResult};

/// EOS data for one material, ready for the release pipeline.
#[derive(Debug, Clone)]
pub struct LoadedMaterial {
    pub name: Option<String>,
    pub isentrope: IsentropeTable,
    pub hugoniot: HugoniotCurve,
}

/// Load and validate a run configuration (YAML, or JSON by extension).
pub fn load_config(path: &Path) -> AppResult<RunConfig> {
    vp_project::load_config(path).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve a table path against the directory holding the config file.
pub fn resolve_table_path(config_path: &Path, table_path: &Path) -> PathBuf {
    if table_path.is_absolute() {
        return table_path.to_path_buf();
    }
    match config_path.parent() {
        Some(dir) => dir.join(table_path),
        None => table_path.to_path_buf(),
    }
}

/// Load both tables named by the configuration.
pub fn load_material(config_path: &Path, config: &RunConfig) -> AppResult<LoadedMaterial> {
    let material = &config.material;

    let isentrope_path = resolve_table_path(config_path, &material.isentrope.path);
    let isentrope = load_isentrope(
        &isentrope_path,
        material
            .isentrope
            .header_rows
            .unwrap_or(DEFAULT_ISENTROPE_HEADER_ROWS),
    )?;

    let hugoniot_path = resolve_table_path(config_path, &material.hugoniot.path);
    let hugoniot = load_hugoniot(
        &hugoniot_path,
        material
            .hugoniot
            .header_rows
            .unwrap_or(DEFAULT_HUGONIOT_HEADER_ROWS),
    )?;

    tracing::info!(
        material = material.name.as_deref().unwrap_or("unnamed"),
        isentropes = isentrope.rows(),
        columns = isentrope.columns(),
        hugoniot_points = hugoniot.len(),
        "loaded material tables"
    );

    Ok(LoadedMaterial {
        name: material.name.clone(),
        isentrope,
        hugoniot,
    })
}
