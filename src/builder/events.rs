//! Build event types for JSON output.
//!
//! These events are emitted when using `--message-format json`, one JSON
//! object per line, tagged by `reason`.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::operation::Operation;
use crate::util::diagnostic::SkipReason;

/// An event emitted while an operation runs.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "reason")]
pub enum BuildEvent {
    /// The compiler was run for one source file.
    #[serde(rename = "compiler-invocation")]
    CompilerInvocation {
        /// Source path as passed to the compiler
        source: String,
        /// Object path as passed to the compiler
        object: PathBuf,
        /// Full command line
        command: String,
        /// Exit code, absent if the compiler could not be run or was killed
        #[serde(skip_serializing_if = "Option::is_none")]
        exit_code: Option<i32>,
        success: bool,
    },

    /// A file was left out of a compile batch.
    #[serde(rename = "file-skipped")]
    FileSkipped { path: String, cause: SkipReason },

    /// An operand did not pass the extension filter.
    #[serde(rename = "file-rejected")]
    FileRejected { path: String, filter: String },

    /// An object file was deleted.
    #[serde(rename = "artifact-removed")]
    ArtifactRemoved { path: PathBuf },

    /// A user-facing diagnostic.
    #[serde(rename = "diagnostic")]
    Diagnostic { level: String, message: String },

    /// The operation ran to completion (or aborted on a usage error).
    #[serde(rename = "operation-finished")]
    OperationFinished {
        operation: Operation,
        aborted: bool,
        compiled: usize,
        failed: usize,
        skipped: usize,
        rejected: usize,
        removed: usize,
        duration_ms: u64,
    },
}
