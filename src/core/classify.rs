//! Filesystem classification of directory entries.

use std::fs;
use std::path::Path;

use crate::core::path;

/// The role an entry plays in a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// A regular file with the source extension.
    Source,
    /// A regular file with the object extension.
    Object,
    Directory,
    /// Anything else, including entries that do not exist.
    Other,
}

impl FileRole {
    /// Classify `path` by querying the filesystem and its extension.
    pub fn of(path: &Path) -> Self {
        let Ok(meta) = fs::metadata(path) else {
            return FileRole::Other;
        };

        if meta.is_dir() {
            return FileRole::Directory;
        }
        if !meta.is_file() {
            return FileRole::Other;
        }

        let text = path.to_string_lossy();
        if path::is_source(&text) {
            FileRole::Source
        } else if path::is_object(&text) {
            FileRole::Object
        } else {
            FileRole::Other
        }
    }
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// False when the entry is absent.
pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}

/// False when the entry is absent.
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}
