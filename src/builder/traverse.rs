//! Whole-tree traversal.
//!
//! Walks the project compiling every source file into a single flat build
//! folder. The tests folder, and everything below it, is never entered.

use std::path::Path;

use anyhow::Result;
use walkdir::{DirEntry, WalkDir};

use crate::builder::executor::Executor;
use crate::core::classify::FileRole;
use crate::core::path;
use crate::util::fs::relative_path;

/// Whether `dir` is the tests folder or lies below it.
fn in_tests_tree(tests_root: &str, dir: &Path) -> bool {
    path::is_within_directory(tests_root, &path::as_directory(dir))
}

fn excluded(tests_root: &str, entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && in_tests_tree(tests_root, entry.path())
}

/// Compile every source file under `current` into `build_root`.
///
/// Sources in nested folders all land directly in `build_root` as
/// `<stem>.o`; when two sources share a stem the last one compiled wins.
/// Sources are passed to the compiler relative to the project root, which is
/// also the compiler's working directory.
pub fn traverse(exec: &mut Executor<'_>, current: &Path, build_root: &Path) -> Result<()> {
    let ctx = exec.ctx();
    let root = ctx.root();
    let tests_root = path::as_directory(&ctx.tests_dir());

    if in_tests_tree(&tests_root, current) {
        tracing::debug!("not entering tests tree: {}", current.display());
        return Ok(());
    }

    let walker = WalkDir::new(current)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !excluded(&tests_root, entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            tracing::debug!("traversing {}", entry.path().display());
            continue;
        }

        if FileRole::of(entry.path()) == FileRole::Source {
            let source = relative_path(root, entry.path());
            exec.compile_file(&source.to_string_lossy(), build_root, root);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::context::BuildContext;
    use crate::core::operation::Operation;
    use crate::test_support::{ProjectFixture, RecordingCompiler};
    use crate::util::config::Config;
    use crate::util::shell::Shell;

    fn run_traverse(fixture: &ProjectFixture, start: &str) -> RecordingCompiler {
        let ctx = BuildContext::new(fixture.root(), Config::default(), Shell::plain());
        let mut compiler = RecordingCompiler::new();
        {
            let mut exec = Executor::new(&ctx, &mut compiler, Operation::BuildAll);
            traverse(&mut exec, &fixture.path(start), &ctx.build_dir()).unwrap();
        }
        compiler
    }

    #[test]
    fn test_traverse_skips_tests_tree() {
        let fixture = ProjectFixture::new()
            .file("a.c")
            .file("tests/b.c")
            .file("sub/c.c");

        let compiler = run_traverse(&fixture, "");

        assert_eq!(compiler.sources(), ["a.c", "sub/c.c"]);
        let objects = compiler.objects();
        assert_eq!(objects[0], fixture.path("build/a.o"));
        assert_eq!(objects[1], fixture.path("build/c.o"));
    }

    #[test]
    fn test_traverse_started_inside_tests_tree() {
        let fixture = ProjectFixture::new()
            .file("tests/unit/deep/x.c")
            .file("tests/unit/y.c");

        let compiler = run_traverse(&fixture, "tests/unit/deep");
        assert!(compiler.calls().is_empty());

        let compiler = run_traverse(&fixture, "tests");
        assert!(compiler.calls().is_empty());
    }

    #[test]
    fn test_traverse_keeps_lookalike_folders() {
        let fixture = ProjectFixture::new()
            .file("tests_old/t.c")
            .file("src/tests/inner.c");

        let compiler = run_traverse(&fixture, "");
        assert_eq!(compiler.sources(), ["src/tests/inner.c", "tests_old/t.c"]);
    }

    #[test]
    fn test_traverse_flat_output_and_filters() {
        let fixture = ProjectFixture::new()
            .file("lib/util.c")
            .file("lib/util.h")
            .file("main.c")
            .file("prjctmkr.c")
            .file("build/old.o")
            .dir("empty.c");

        let compiler = run_traverse(&fixture, "");

        assert_eq!(compiler.sources(), ["lib/util.c", "main.c"]);
        for object in compiler.objects() {
            assert_eq!(object.parent().unwrap(), fixture.path("build").as_path());
        }
    }

    #[test]
    fn test_traverse_subtree() {
        let fixture = ProjectFixture::new().file("a.c").file("sub/c.c");

        let compiler = run_traverse(&fixture, "sub");
        assert_eq!(compiler.sources(), ["sub/c.c"]);
        assert_eq!(compiler.calls()[0].cwd.as_path(), fixture.root());
    }
}
