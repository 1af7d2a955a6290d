//! prjctmkr - a minimal build orchestrator for C projects
//!
//! This crate compiles `.c` files spread over nested folders into flat
//! `build` and `tests` folders, one external compiler run per file, and
//! cleans the resulting objects.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for prjctmkr unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a recording compiler double and temporary
/// project trees.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuildContext, Compiler, ProcessCompiler, Report};
pub use crate::core::{Operation, PathName, Request};
pub use ops::run_operation;
pub use util::{Config, Shell};
