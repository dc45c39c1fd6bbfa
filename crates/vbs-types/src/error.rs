use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid version {input:?}: {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("invalid path: {0}")]
    InvalidPath(String),
}
