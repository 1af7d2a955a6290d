//! Test utilities for prjctmkr unit tests.
//!
//! [`RecordingCompiler`] stands in for the external compiler and records every
//! invocation; [`ProjectFixture`] lays out a throwaway project tree.
//!
//! # Example
//!
//! ```rust,ignore
//! use prjctmkr::test_support::{ProjectFixture, RecordingCompiler};
//!
//! #[test]
//! fn test_example() {
//!     let fixture = ProjectFixture::new().file("src/main.c").dir("build");
//!     let mut compiler = RecordingCompiler::new().fail_on("main.c", 1);
//!
//!     // Run an operation against fixture.root()...
//!     assert_eq!(compiler.sources(), ["src/main.c"]);
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;

use crate::builder::compiler::{CompileInvocation, CompileStatus, Compiler};
use crate::core::path::filename_of;

pub use fixtures::*;

/// Compiler double that records invocations instead of running anything.
///
/// Every invocation succeeds unless its source file name was registered with
/// [`RecordingCompiler::fail_on`].
#[derive(Debug, Default)]
pub struct RecordingCompiler {
    calls: Vec<CompileInvocation>,
    failures: HashMap<String, i32>,
}

impl RecordingCompiler {
    pub fn new() -> Self {
        RecordingCompiler {
            calls: Vec::new(),
            failures: HashMap::new(),
        }
    }

    /// Make compiles of `source` (matched on its file name) exit with `code`.
    pub fn fail_on(mut self, source: &str, code: i32) -> Self {
        self.failures.insert(filename_of(source).to_string(), code);
        self
    }

    /// All invocations, in order.
    pub fn calls(&self) -> &[CompileInvocation] {
        &self.calls
    }

    /// Source operand of each invocation.
    pub fn sources(&self) -> Vec<String> {
        self.calls.iter().map(|c| c.source.clone()).collect()
    }

    /// Object path of each invocation.
    pub fn objects(&self) -> Vec<PathBuf> {
        self.calls.iter().map(|c| c.object.clone()).collect()
    }
}

impl Compiler for RecordingCompiler {
    fn compile(&mut self, invocation: &CompileInvocation) -> Result<CompileStatus> {
        self.calls.push(invocation.clone());

        let status = match self.failures.get(filename_of(&invocation.source)) {
            Some(&code) => CompileStatus::exited(code),
            None => CompileStatus::success(),
        };
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::config::CompileTemplate;

    fn invocation(source: &str) -> CompileInvocation {
        CompileInvocation::new(&CompileTemplate::default(), source, "out.o", "/p")
    }

    #[test]
    fn test_recording_compiler() {
        let mut compiler = RecordingCompiler::new().fail_on("bad.c", 3);

        let ok = compiler.compile(&invocation("src/good.c")).unwrap();
        let bad = compiler.compile(&invocation("src/bad.c")).unwrap();

        assert!(ok.is_success());
        assert_eq!(bad, CompileStatus::exited(3));
        assert_eq!(compiler.sources(), ["src/good.c", "src/bad.c"]);
        assert_eq!(compiler.objects(), [PathBuf::from("out.o"), PathBuf::from("out.o")]);
    }
}
