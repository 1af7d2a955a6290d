//! User-facing diagnostics.
//!
//! None of these conditions stops the process with a failure status. A
//! [`UsageError`] turns the requested operation into a no-op; a [`SkipReason`]
//! drops a single file from a batch that otherwise carries on.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::core::operation::Operation;
use crate::core::path::PathError;

/// Tool name used to tag every diagnostic line.
pub const PROGRAM_NAME: &str = "prjctmkr";

/// An operation was requested in a way it cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("operation '{operation}' expects at least 1 file")]
    MissingOperands { operation: Operation },

    #[error("operation '{operation}' expects 0 files")]
    UnexpectedOperands { operation: Operation, count: usize },

    #[error(transparent)]
    InvalidOperand(#[from] PathError),

    #[error("operation '{operation}' needs a tests folder: {} does not exist", path.display())]
    MissingTestsFolder { operation: Operation, path: PathBuf },
}

/// Why a single file was left out of a compile batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The path is absent or not a regular file.
    NotAFile,
    /// The path is the tool's own source.
    OwnSource,
}

impl SkipReason {
    /// Format the diagnostic for `path`.
    pub fn message(self, path: &str) -> String {
        match self {
            SkipReason::NotAFile => format!("not a file: {}", path),
            SkipReason::OwnSource => format!("[{}] ignoring own source", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_messages() {
        let err = UsageError::UnexpectedOperands {
            operation: Operation::BuildAll,
            count: 3,
        };
        assert_eq!(err.to_string(), "operation 'buildall' expects 0 files");

        let err = UsageError::from(PathError::Empty);
        assert_eq!(err.to_string(), "empty file name");
    }

    #[test]
    fn test_skip_messages() {
        assert_eq!(SkipReason::NotAFile.message("x.c"), "not a file: x.c");
        assert_eq!(
            SkipReason::OwnSource.message("prjctmkr.c"),
            "[prjctmkr.c] ignoring own source"
        );
    }
}
