use thiserror::Error;

pub type VpResult<T> = Result<T, VpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
