//! Run configuration validation.

use crate::schema::{LATEST_VERSION, RunConfig, TableDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing table path: {field}")]
    MissingPath { field: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        })
    }
}

fn table(field: &str, def: &TableDef) -> Result<(), ValidationError> {
    if def.path.as_os_str().is_empty() {
        return Err(ValidationError::MissingPath {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub fn validate_run_config(config: &RunConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    table("material.isentrope.path", &config.material.isentrope)?;
    table("material.hugoniot.path", &config.material.hugoniot)?;
    positive(
        "material.triple_point_pressure_pa",
        config.material.triple_point_pressure_pa,
    )?;
    positive(
        "release.target_entropy_j_per_kg_k",
        config.release.target_entropy_j_per_kg_k,
    )?;
    positive("release.initial_radius_km", config.release.initial_radius_km)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_valid() {
        validate_run_config(&RunConfig::template()).unwrap();
    }

    #[test]
    fn negative_radius_rejected() {
        let mut config = RunConfig::template();
        config.release.initial_radius_km = -1.0;
        let err = validate_run_config(&config).unwrap_err();
        assert!(err.to_string().contains("initial_radius_km"));
    }

    #[test]
    fn empty_path_rejected() {
        let mut config = RunConfig::template();
        config.material.hugoniot.path = Default::default();
        assert!(matches!(
            validate_run_config(&config),
            Err(ValidationError::MissingPath { .. })
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut config = RunConfig::template();
        config.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_run_config(&config),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
