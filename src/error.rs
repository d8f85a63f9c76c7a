//! Error types for feature scaffolding.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Everything that can stop a generation run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("invalid field name '{name}': {reason}")]
    InvalidField { name: String, reason: String },

    #[error("duplicate field name '{0}'")]
    DuplicateField(String),

    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("feature already exists at {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse error classification used for reporting and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Config,
    AlreadyExists,
    Filesystem,
}

impl ScaffoldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScaffoldError::InvalidModuleName { .. }
            | ScaffoldError::InvalidField { .. }
            | ScaffoldError::DuplicateField(_) => ErrorKind::Validation,
            ScaffoldError::Config { .. } => ErrorKind::Config,
            ScaffoldError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            ScaffoldError::Filesystem { .. } => ErrorKind::Filesystem,
        }
    }

    /// Wrap an I/O error together with the path it happened on
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl ErrorKind {
    /// Process exit code for this class of failure
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Validation | ErrorKind::Config => 2,
            ErrorKind::AlreadyExists => 3,
            ErrorKind::Filesystem => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(ScaffoldError::DuplicateField("id".into()).kind(), ErrorKind::Validation);
        assert_eq!(
            ScaffoldError::AlreadyExists { path: PathBuf::from("src/features/users") }.kind(),
            ErrorKind::AlreadyExists
        );
        let err = ScaffoldError::filesystem("x", io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.kind(), ErrorKind::Filesystem);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        assert_eq!(ErrorKind::Validation.exit_code(), 2);
        assert_eq!(ErrorKind::AlreadyExists.exit_code(), 3);
        assert_eq!(ErrorKind::Filesystem.exit_code(), 4);
    }
}
