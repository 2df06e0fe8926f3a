//! Error types shared across HPE crates.

use std::path::PathBuf;

/// Top-level error type for HPE operations.
#[derive(Debug, thiserror::Error)]
pub enum HpeError {
    #[error("Malformed skeleton: expected {expected} joints, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    #[error("Unknown joint name: {name:?}")]
    UnknownJointName { name: String },

    #[error("Unknown body model: {name:?}")]
    UnknownBodyModel { name: String },

    #[error("Joint index {index} out of range for skeleton of {len} joints")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Event {field} = {value} exceeds maximum {max}")]
    CoordinateOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Event stream of {len} bytes is not a whole number of 8-byte records")]
    TruncatedRecord { len: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using HpeError.
pub type HpeResult<T> = Result<T, HpeError>;

impl HpeError {
    pub fn malformed(expected: usize, actual: usize) -> Self {
        Self::MalformedInput { expected, actual }
    }

    pub fn unknown_joint(name: impl Into<String>) -> Self {
        Self::UnknownJointName { name: name.into() }
    }

    pub fn unknown_body_model(name: impl Into<String>) -> Self {
        Self::UnknownBodyModel { name: name.into() }
    }

    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }
}
