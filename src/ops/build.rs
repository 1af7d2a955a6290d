//! Implementation of the build and tests operations.

use std::path::Path;

use anyhow::Result;

use crate::builder::executor::Executor;
use crate::builder::traverse::traverse;
use crate::core::classify::{self, FileRole};
use crate::core::operation::Operation;
use crate::core::path::PathName;
use crate::util::diagnostic::UsageError;
use crate::util::fs::{ensure_dir, expand_operands, list_entries};

/// Compile the given sources into `<root>/build`.
///
/// Operands are resolved against the project root.
pub fn build(exec: &mut Executor<'_>, files: Vec<PathName>) -> Result<()> {
    let ctx = exec.ctx();
    let build_dir = ctx.build_dir();
    ensure_dir(&build_dir)?;

    let files = expand_operands(ctx.root(), files);
    exec.compile_to_folder(files, &build_dir, ctx.root());
    Ok(())
}

/// Compile the given test sources into `<root>/tests`.
///
/// Operands are resolved against the tests folder, where the compiler runs.
pub fn tests(exec: &mut Executor<'_>, files: Vec<PathName>) -> Result<()> {
    let tests_dir = require_tests_dir(exec, Operation::Tests)?;

    let files = expand_operands(&tests_dir, files);
    exec.compile_to_folder(files, &tests_dir, &tests_dir);
    Ok(())
}

/// Compile every source of the project, outside the tests folder, into
/// `<root>/build`.
pub fn build_all(exec: &mut Executor<'_>) -> Result<()> {
    let ctx = exec.ctx();
    let build_dir = ctx.build_dir();
    ensure_dir(&build_dir)?;

    traverse(exec, ctx.root(), &build_dir)
}

/// Compile every source directly inside the tests folder, next to itself.
pub fn tests_all(exec: &mut Executor<'_>) -> Result<()> {
    let tests_dir = require_tests_dir(exec, Operation::TestsAll)?;

    for entry in list_entries(&tests_dir)? {
        if FileRole::of(&entry) != FileRole::Source {
            continue;
        }
        if let Some(name) = entry.file_name() {
            exec.compile_file(&name.to_string_lossy(), Path::new("."), &tests_dir);
        }
    }
    Ok(())
}

fn require_tests_dir(exec: &Executor<'_>, operation: Operation) -> Result<std::path::PathBuf> {
    let tests_dir = exec.ctx().tests_dir();
    if !classify::is_directory(&tests_dir) {
        return Err(UsageError::MissingTestsFolder {
            operation,
            path: tests_dir,
        }
        .into());
    }
    Ok(tests_dir)
}
