//! Table loading errors.

use std::path::PathBuf;
use thiserror::Error;
use vp_core::VpError;

/// Result type for EOS table operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors raised while reading or validating EOS tables.
#[derive(Error, Debug)]
pub enum EosError {
    /// Shape or content does not match the expected column/unit layout.
    #[error("Malformed table data in {what}: {detail}")]
    Malformed { what: &'static str, detail: String },

    /// A token could not be read as a number.
    #[error("Unparseable value '{token}' on line {line} of {what}")]
    Parse {
        what: &'static str,
        line: usize,
        token: String,
    },

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EosError {
    pub(crate) fn malformed(what: &'static str, detail: impl Into<String>) -> Self {
        EosError::Malformed {
            what,
            detail: detail.into(),
        }
    }
}

impl From<VpError> for EosError {
    fn from(err: VpError) -> Self {
        EosError::Malformed {
            what: "table values",
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::Parse {
            what: "hugoniot",
            line: 4,
            token: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("abc"));
        assert!(msg.contains("line 4"));
    }

    #[test]
    fn non_finite_becomes_malformed() {
        let err: EosError = VpError::NonFinite {
            what: "pressure",
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, EosError::Malformed { .. }));
    }
}
