//! Error types for release calculations.

use thiserror::Error;
use vp_eos::EosError;

pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Every variant aborts the pipeline; no stage returns partial output.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Entropy {target} J/(kg·K) is not bracketed by the {axis} entropy axis")]
    EntropyOutOfRange { axis: &'static str, target: f64 },

    #[error("Interpolation at {x} outside domain [{min}, {max}]")]
    InterpolationDomain { x: f64, min: f64, max: f64 },

    #[error("Invalid kinematics step {step}: time step {dt_s} s is not positive")]
    InvalidKinematicsStep { step: usize, dt_s: f64 },

    #[error("No {what} column below {pressure_gpa} GPa")]
    PressureNotBracketed {
        what: &'static str,
        pressure_gpa: f64,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Table(#[from] EosError),
}
