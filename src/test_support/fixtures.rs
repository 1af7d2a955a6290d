//! Project tree fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A project root in a temporary directory, removed on drop.
///
/// Built with chained calls:
///
/// ```rust,ignore
/// let fixture = ProjectFixture::new()
///     .file("main.c")
///     .file("tests/main_test.c")
///     .dir("build");
/// ```
#[derive(Debug)]
pub struct ProjectFixture {
    tmp: TempDir,
}

impl ProjectFixture {
    pub fn new() -> Self {
        ProjectFixture {
            tmp: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Add a file, creating parent folders. C sources get a stub body.
    pub fn file(self, rel: &str) -> Self {
        let content = if rel.ends_with(".c") {
            "int main(void) { return 0; }\n"
        } else {
            ""
        };
        self.file_with(rel, content)
    }

    /// Add a file with the given content, creating parent folders.
    pub fn file_with(self, rel: &str, content: &str) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        self
    }

    /// Add an empty folder.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.path(rel)).expect("failed to create fixture dir");
        self
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Absolute path of `rel` inside the project; `""` is the root itself.
    pub fn path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(rel)
        }
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_layout() {
        let fixture = ProjectFixture::new()
            .file("src/deep/a.c")
            .file_with("notes.txt", "hello")
            .dir("build");

        assert!(fixture.path("src/deep/a.c").is_file());
        assert_eq!(fs::read_to_string(fixture.path("notes.txt")).unwrap(), "hello");
        assert!(fixture.path("build").is_dir());
        assert_eq!(fixture.path(""), fixture.root());
    }
}
