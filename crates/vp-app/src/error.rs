//! Error types for the vp-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates for CLI front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load run configuration {path}: {source}")]
    Config {
        path: PathBuf,
        source: vp_project::ProjectError,
    },

    #[error("Invalid run configuration: {0}")]
    Validation(#[from] vp_project::ValidationError),

    #[error("EOS table error: {0}")]
    Eos(#[from] vp_eos::EosError),

    #[error("Release calculation failed: {0}")]
    Release(#[from] vp_release::ReleaseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
