//! Run configuration schema.
//!
//! ```yaml
//! version: 1
//! name: forsterite-7000
//! material:
//!   name: Forsterite-ANEOS-SLVTv1.0G1
//!   isentrope:
//!     path: NEW-GADGET-STD-NOTENSION.TXT
//!   hugoniot:
//!     path: NEW-SESAME-HUG.TXT
//!     header_rows: 3
//!   triple_point_pressure_pa: 5.2
//! release:
//!   target_entropy_j_per_kg_k: 7000.0
//!   initial_radius_km: 1.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    pub material: MaterialDef,
    #[serde(default)]
    pub release: ReleaseDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub isentrope: TableDef,
    pub hugoniot: TableDef,
    #[serde(default = "default_triple_point_pa")]
    pub triple_point_pressure_pa: f64,
}

/// A table file; relative paths resolve against the config file's directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableDef {
    pub path: PathBuf,
    /// Lines skipped before data; the loader default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_rows: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseDef {
    #[serde(default = "default_target_entropy")]
    pub target_entropy_j_per_kg_k: f64,
    #[serde(default = "default_initial_radius_km")]
    pub initial_radius_km: f64,
}

impl Default for ReleaseDef {
    fn default() -> Self {
        Self {
            target_entropy_j_per_kg_k: default_target_entropy(),
            initial_radius_km: default_initial_radius_km(),
        }
    }
}

impl RunConfig {
    /// Starting point for a new forsterite run file.
    pub fn template() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "forsterite".to_string(),
            material: MaterialDef {
                name: Some("Forsterite-ANEOS-SLVTv1.0G1".to_string()),
                isentrope: TableDef {
                    path: PathBuf::from("NEW-GADGET-STD-NOTENSION.TXT"),
                    header_rows: None,
                },
                hugoniot: TableDef {
                    path: PathBuf::from("NEW-SESAME-HUG.TXT"),
                    header_rows: Some(3),
                },
                triple_point_pressure_pa: default_triple_point_pa(),
            },
            release: ReleaseDef::default(),
        }
    }
}

fn default_version() -> u32 {
    LATEST_VERSION
}

fn default_triple_point_pa() -> f64 {
    5.2
}

fn default_target_entropy() -> f64 {
    7000.0
}

fn default_initial_radius_km() -> f64 {
    1.0
}
