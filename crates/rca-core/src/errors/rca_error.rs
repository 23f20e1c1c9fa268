use super::error_code::{self, RcaErrorCode};
use super::{ConfigError, ForestError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RcaError {
    #[error("forest error: {0}")]
    Forest(#[from] ForestError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type RcaResult<T> = Result<T, RcaError>;

impl RcaErrorCode for RcaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Forest(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION,
        }
    }
}
