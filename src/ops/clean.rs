//! Implementation of the clean operations.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::executor::Executor;
use crate::core::path::{self, PathName, OBJECT_EXTENSION};
use crate::util::fs::{expand_operands, list_entries};

fn output_folders(exec: &Executor<'_>) -> [PathBuf; 2] {
    let ctx = exec.ctx();
    [ctx.build_dir(), ctx.tests_dir()]
}

/// Delete the named objects from both `<root>/build` and `<root>/tests`.
///
/// Operands are taken relative to each output folder, so `foo.o` removes
/// `build/foo.o` and `tests/foo.o`. Wildcards are expanded per folder.
pub fn clean(exec: &mut Executor<'_>, mut files: Vec<PathName>) -> Result<()> {
    exec.keep_only(&mut files, OBJECT_EXTENSION);

    for folder in output_folders(exec) {
        let base = folder.to_string_lossy().into_owned();
        for file in expand_operands(&folder, files.clone()) {
            let mut target = base.clone();
            path::append_directory(&mut target, &file);
            exec.remove_object(Path::new(&target));
        }
    }
    Ok(())
}

/// Delete every object directly inside `<root>/build` and `<root>/tests`.
///
/// Missing folders are ignored; subfolders are not entered.
pub fn clean_all(exec: &mut Executor<'_>) -> Result<()> {
    for folder in output_folders(exec) {
        for entry in list_entries(&folder)? {
            if path::is_object(&entry.to_string_lossy()) {
                exec.remove_object(&entry);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::builder::context::BuildContext;
    use crate::core::operation::Operation;
    use crate::ops::run_operation;
    use crate::test_support::{ProjectFixture, RecordingCompiler};
    use crate::util::config::Config;
    use crate::util::shell::Shell;

    fn context(fixture: &ProjectFixture) -> BuildContext {
        BuildContext::new(fixture.root(), Config::default(), Shell::plain())
    }

    #[test]
    fn test_clean_removes_from_both_folders() {
        let fixture = ProjectFixture::new()
            .file("build/foo.o")
            .file("tests/foo.o")
            .file("build/bar.o")
            .file("tests/foo.c")
            .file("foo.o");
        let ctx = context(&fixture);
        let mut compiler = RecordingCompiler::new();

        let report = run_operation(&ctx, &mut compiler, Operation::Clean, ["foo.o"]).unwrap();

        assert_eq!(report.removed, 2);
        assert!(!fixture.path("build/foo.o").exists());
        assert!(!fixture.path("tests/foo.o").exists());
        assert!(fixture.path("build/bar.o").exists());
        assert!(fixture.path("tests/foo.c").exists());
        assert!(fixture.path("foo.o").exists());
    }

    #[test]
    fn test_clean_filters_non_objects() {
        let fixture = ProjectFixture::new().file("build/foo.c").file("build/foo.o");
        let ctx = context(&fixture);
        let mut compiler = RecordingCompiler::new();

        let report = run_operation(&ctx, &mut compiler, Operation::Clean, ["foo.c"]).unwrap();

        assert_eq!(report.rejected, 1);
        assert_eq!(report.removed, 0);
        assert!(fixture.path("build/foo.c").exists());
        assert!(fixture.path("build/foo.o").exists());
    }

    #[test]
    fn test_clean_skips_directories_named_like_objects() {
        let fixture = ProjectFixture::new().dir("build/odd.o").file("tests/odd.o");
        let ctx = context(&fixture);
        let mut compiler = RecordingCompiler::new();

        let report = run_operation(&ctx, &mut compiler, Operation::Clean, ["odd.o"]).unwrap();

        assert_eq!(report.removed, 1);
        assert!(fixture.path("build/odd.o").is_dir());
        assert!(!fixture.path("tests/odd.o").exists());
    }

    #[test]
    fn test_clean_expands_wildcards_per_folder() {
        let fixture = ProjectFixture::new()
            .file("build/a.o")
            .file("build/b.o")
            .file("tests/t.o")
            .file("tests/t.c");
        let ctx = context(&fixture);
        let mut compiler = RecordingCompiler::new();

        let report = run_operation(&ctx, &mut compiler, Operation::Clean, ["*.o"]).unwrap();

        assert_eq!(report.removed, 3);
        assert!(fixture.path("tests/t.c").exists());
    }

    #[test]
    fn test_clean_all() {
        let fixture = ProjectFixture::new()
            .file("build/a.o")
            .file("build/b.o")
            .file("build/notes.txt")
            .file("build/nested/deep.o")
            .file("tests/t.o")
            .file("tests/t.c")
            .file("src/keep.o");
        let ctx = context(&fixture);
        let mut compiler = RecordingCompiler::new();

        let report =
            run_operation(&ctx, &mut compiler, Operation::CleanAll, Vec::<String>::new()).unwrap();

        assert_eq!(report.removed, 3);
        assert!(!fixture.path("build/a.o").exists());
        assert!(!fixture.path("build/b.o").exists());
        assert!(!fixture.path("tests/t.o").exists());
        assert!(fixture.path("build/notes.txt").exists());
        assert!(fixture.path("build/nested/deep.o").exists());
        assert!(fixture.path("tests/t.c").exists());
        assert!(fixture.path("src/keep.o").exists());
    }

    #[test]
    fn test_clean_all_without_folders() {
        let fixture = ProjectFixture::new().file("a.c");
        let ctx = context(&fixture);
        let mut compiler = RecordingCompiler::new();

        let report =
            run_operation(&ctx, &mut compiler, Operation::CleanAll, Vec::<String>::new()).unwrap();

        assert!(!report.aborted);
        assert_eq!(report.removed, 0);
    }
}
