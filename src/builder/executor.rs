//! Per-file build steps and the operation summary.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;

use crate::builder::compiler::{CompileInvocation, Compiler};
use crate::builder::context::BuildContext;
use crate::builder::events::BuildEvent;
use crate::core::classify;
use crate::core::operation::Operation;
use crate::core::path::{self, PathName, OBJECT_EXTENSION, SOURCE_EXTENSION};
use crate::util::diagnostic::{SkipReason, PROGRAM_NAME};
use crate::util::fs::remove_file;
use crate::util::shell::{format_duration, Status};

/// The tool's own source file, never compiled by the tool itself.
pub const PROGRAM_SOURCE: &str = "prjctmkr.c";

/// Whether `file` names the tool's own source.
pub fn is_own_source(file: &str) -> bool {
    path::filename_of(file) == PROGRAM_SOURCE
}

/// Object path for `source` inside `destination`: `<destination>/<stem>.o`.
pub fn object_path(destination: &Path, source: &str) -> PathBuf {
    let mut object = destination.to_string_lossy().into_owned();
    path::append_directory(
        &mut object,
        &format!("{}{}", path::stem(source), OBJECT_EXTENSION),
    );
    PathBuf::from(object)
}

/// Delete `path` if it exists, is a regular file, and has the object extension.
///
/// Returns whether a file was removed.
pub fn delete_if_object(path: &Path) -> Result<bool> {
    if classify::exists(path)
        && classify::is_regular_file(path)
        && path::is_object(&path.to_string_lossy())
    {
        remove_file(path)?;
        return Ok(true);
    }
    Ok(false)
}

/// Outcome of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub operation: Operation,
    /// The operation was refused before touching anything.
    pub aborted: bool,
    /// Compiler runs that exited successfully.
    pub compiled: usize,
    /// Compiler runs that failed or could not start.
    pub failed: usize,
    pub skipped: usize,
    pub rejected: usize,
    pub removed: usize,
}

impl Report {
    pub fn new(operation: Operation) -> Self {
        Report {
            operation,
            aborted: false,
            compiled: 0,
            failed: 0,
            skipped: 0,
            rejected: 0,
            removed: 0,
        }
    }

    /// Number of times the compiler was run.
    pub fn invocations(&self) -> usize {
        self.compiled + self.failed
    }
}

/// Carries out the per-file steps of an operation and tallies the results.
pub struct Executor<'a> {
    ctx: &'a BuildContext,
    compiler: &'a mut dyn Compiler,
    report: Report,
    start: Instant,
}

impl<'a> Executor<'a> {
    pub fn new(
        ctx: &'a BuildContext,
        compiler: &'a mut dyn Compiler,
        operation: Operation,
    ) -> Self {
        Executor {
            ctx,
            compiler,
            report: Report::new(operation),
            start: Instant::now(),
        }
    }

    pub fn ctx(&self) -> &'a BuildContext {
        self.ctx
    }

    /// Compile `file` (resolved against `cwd`) into `destination`.
    ///
    /// Missing files, non-files and the tool's own source are reported and
    /// skipped. The compiler's exit status is reported but never stops the
    /// batch.
    pub fn compile_file(&mut self, file: &str, destination: &Path, cwd: &Path) {
        let resolved = cwd.join(file);
        if !classify::exists(&resolved) || !classify::is_regular_file(&resolved) {
            self.skip(file, SkipReason::NotAFile);
            return;
        }
        if is_own_source(file) {
            self.skip(file, SkipReason::OwnSource);
            return;
        }

        let object = object_path(destination, file);
        let invocation =
            CompileInvocation::new(self.ctx.compile_template(), file, object, cwd);
        let command = invocation.command_line();
        let shell = self.ctx.shell();

        shell.status(Status::Compiling, &command);
        tracing::debug!("running in {}", cwd.display());

        let exit_code = match self.compiler.compile(&invocation) {
            Ok(status) if status.is_success() => {
                self.report.compiled += 1;
                status.exit_code
            }
            Ok(status) => {
                self.report.failed += 1;
                match status.exit_code {
                    Some(code) => shell.warn(format!(
                        "`{}` exited with status {} for {}",
                        invocation.template.program(),
                        code,
                        file
                    )),
                    None => shell.warn(format!(
                        "`{}` was terminated while compiling {}",
                        invocation.template.program(),
                        file
                    )),
                }
                status.exit_code
            }
            Err(e) => {
                self.report.failed += 1;
                shell.warn(format!("failed to compile {}: {:#}", file, e));
                None
            }
        };

        shell.event(&BuildEvent::CompilerInvocation {
            source: invocation.source,
            object: invocation.object,
            command,
            exit_code,
            success: exit_code == Some(0),
        });
    }

    /// Filter `files` to sources and compile each into `destination`.
    pub fn compile_to_folder(&mut self, mut files: Vec<PathName>, destination: &Path, cwd: &Path) {
        self.keep_only(&mut files, SOURCE_EXTENSION);

        for file in &files {
            self.compile_file(file, destination, cwd);
        }
    }

    /// Apply the extension filter, reporting each rejected operand.
    pub fn keep_only(&mut self, files: &mut Vec<PathName>, extension: &str) {
        let rejected = crate::core::filter::keep_only(files, extension);
        let shell = self.ctx.shell();

        for file in rejected {
            self.report.rejected += 1;
            shell.rejected(extension, &file);
            shell.event(&BuildEvent::FileRejected {
                path: file.to_string(),
                filter: format!("*{}", extension),
            });
        }
    }

    /// Delete `path` if it is an object file, reporting the removal.
    pub fn remove_object(&mut self, path: &Path) {
        let shell = self.ctx.shell();
        match delete_if_object(path) {
            Ok(true) => {
                self.report.removed += 1;
                shell.status(Status::Removed, path.display());
                shell.event(&BuildEvent::ArtifactRemoved {
                    path: path.to_path_buf(),
                });
            }
            Ok(false) => tracing::debug!("nothing to remove at {}", path.display()),
            Err(e) => shell.warn(format!("{:#}", e)),
        }
    }

    fn skip(&mut self, file: &str, reason: SkipReason) {
        self.report.skipped += 1;
        let shell = self.ctx.shell();
        shell.skipped(reason.message(file));
        shell.event(&BuildEvent::FileSkipped {
            path: file.to_string(),
            cause: reason,
        });
    }

    /// Mark the operation as refused.
    pub fn abort(&mut self) {
        self.report.aborted = true;
    }

    /// Print the summary and hand back the report.
    pub fn finish(self) -> Report {
        let report = self.report;
        let elapsed = self.start.elapsed();
        let shell = self.ctx.shell();

        if !report.aborted {
            shell.status(
                Status::Finished,
                format!(
                    "{} ({}) in {}",
                    report.operation,
                    summary(&report),
                    format_duration(elapsed)
                ),
            );
        } else {
            tracing::debug!("{}: '{}' aborted", PROGRAM_NAME, report.operation);
        }

        shell.event(&BuildEvent::OperationFinished {
            operation: report.operation,
            aborted: report.aborted,
            compiled: report.compiled,
            failed: report.failed,
            skipped: report.skipped,
            rejected: report.rejected,
            removed: report.removed,
            duration_ms: elapsed.as_millis() as u64,
        });

        report
    }
}

fn summary(report: &Report) -> String {
    let mut parts = Vec::new();
    match report.operation {
        Operation::Clean | Operation::CleanAll => {
            parts.push(format!("{} removed", report.removed));
        }
        _ => {
            parts.push(format!("{} compiled", report.compiled));
            if report.failed > 0 {
                parts.push(format!("{} failed", report.failed));
            }
            if report.skipped > 0 {
                parts.push(format!("{} skipped", report.skipped));
            }
        }
    }
    if report.rejected > 0 {
        parts.push(format!("{} rejected", report.rejected));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ProjectFixture, RecordingCompiler};
    use crate::util::config::Config;
    use crate::util::shell::Shell;

    #[test]
    fn test_object_path() {
        assert_eq!(
            object_path(Path::new("/p/build"), "src/sub/main.c"),
            PathBuf::from("/p/build/main.o")
        );
        assert_eq!(
            object_path(Path::new("/p/build"), "toolong_name.c"),
            PathBuf::from("/p/build/toolong_.o")
        );
        assert_eq!(object_path(Path::new("."), "t.c"), PathBuf::from("./t.o"));
    }

    #[test]
    fn test_is_own_source() {
        assert!(is_own_source("prjctmkr.c"));
        assert!(is_own_source("tools/prjctmkr.c"));
        assert!(!is_own_source("prjctmkr.o"));
        assert!(!is_own_source("main.c"));
    }

    #[test]
    fn test_delete_if_object_guards() {
        let fixture = ProjectFixture::new()
            .file("a.o")
            .file("a.c")
            .dir("d.o");

        assert!(delete_if_object(&fixture.path("a.o")).unwrap());
        assert!(!fixture.path("a.o").exists());

        assert!(!delete_if_object(&fixture.path("a.c")).unwrap());
        assert!(!delete_if_object(&fixture.path("d.o")).unwrap());
        assert!(!delete_if_object(&fixture.path("missing.o")).unwrap());
        assert!(fixture.path("a.c").exists());
        assert!(fixture.path("d.o").is_dir());
    }

    #[test]
    fn test_compile_own_source_is_skipped() {
        let fixture = ProjectFixture::new().file("prjctmkr.c");
        let ctx = BuildContext::new(fixture.root(), Config::default(), Shell::plain());
        let mut compiler = RecordingCompiler::new();

        let mut exec = Executor::new(&ctx, &mut compiler, Operation::Build);
        exec.compile_file("prjctmkr.c", &ctx.build_dir(), ctx.root());
        let report = exec.finish();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.invocations(), 0);
        assert!(compiler.calls().is_empty());
    }

    #[test]
    fn test_compile_missing_and_directory_are_skipped() {
        let fixture = ProjectFixture::new().dir("folder.c");
        let ctx = BuildContext::new(fixture.root(), Config::default(), Shell::plain());
        let mut compiler = RecordingCompiler::new();

        let mut exec = Executor::new(&ctx, &mut compiler, Operation::Build);
        exec.compile_file("missing.c", &ctx.build_dir(), ctx.root());
        exec.compile_file("folder.c", &ctx.build_dir(), ctx.root());
        let report = exec.finish();

        assert_eq!(report.skipped, 2);
        assert!(compiler.calls().is_empty());
    }

    #[test]
    fn test_compile_failures_are_counted() {
        let fixture = ProjectFixture::new().file("bad.c").file("good.c");
        let ctx = BuildContext::new(fixture.root(), Config::default(), Shell::plain());
        let mut compiler = RecordingCompiler::new().fail_on("bad.c", 1);

        let mut exec = Executor::new(&ctx, &mut compiler, Operation::Build);
        exec.compile_file("bad.c", &ctx.build_dir(), ctx.root());
        exec.compile_file("good.c", &ctx.build_dir(), ctx.root());
        let report = exec.finish();

        assert_eq!(report.failed, 1);
        assert_eq!(report.compiled, 1);
        assert_eq!(compiler.calls().len(), 2);
    }

    #[test]
    fn test_summary() {
        let mut report = Report::new(Operation::Build);
        report.compiled = 3;
        report.failed = 1;
        report.rejected = 2;
        assert_eq!(summary(&report), "3 compiled, 1 failed, 2 rejected");

        let mut report = Report::new(Operation::CleanAll);
        report.removed = 4;
        assert_eq!(summary(&report), "4 removed");
    }
}
