//! Path model.
//!
//! Paths handled here are plain slash-separated text. The functions are pure
//! string operations: they never touch the filesystem, so a path that does not
//! exist yet (an object file about to be produced) classifies the same way as
//! one that does.

use std::fmt;
use std::ops::Deref;
use std::path::Path;

use thiserror::Error;

/// Maximum length of an operand path, in characters.
pub const MAX_PATH_LEN: usize = 128;

/// Maximum length of a stem (the legacy 8.3 naming limit).
pub const STEM_LEN: usize = 8;

pub const DIRECTORY_SEPARATOR: char = '/';
pub const EXTENSION_SEPARATOR: char = '.';

pub const SOURCE_EXTENSION: &str = ".c";
pub const OBJECT_EXTENSION: &str = ".o";

/// Error materializing an operand into a [`PathName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty file name")]
    Empty,

    #[error("file name is longer than {max} characters: {name}")]
    TooLong { name: String, max: usize },
}

/// A bounded, non-empty path named on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathName(String);

impl PathName {
    /// Create a path name, rejecting empty or over-long text.
    pub fn new(name: impl Into<String>) -> Result<Self, PathError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PathError::Empty);
        }
        if name.chars().count() > MAX_PATH_LEN {
            return Err(PathError::TooLong {
                name,
                max: MAX_PATH_LEN,
            });
        }
        Ok(PathName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Deref for PathName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for PathName {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for PathName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Materialize a list of operands, failing on the first invalid one.
pub fn path_names<I, S>(operands: I) -> Result<Vec<PathName>, PathError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    operands.into_iter().map(PathName::new).collect()
}

/// The text after the last directory separator, or the whole path.
pub fn filename_of(path: &str) -> &str {
    match path.rfind(DIRECTORY_SEPARATOR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// The text from the last dot of the final segment onward.
///
/// Returns the whole path when the final segment has no dot, so a dot in a
/// directory component never counts as an extension.
pub fn extension_of(path: &str) -> &str {
    let name = filename_of(path);
    match name.rfind(EXTENSION_SEPARATOR) {
        Some(idx) => {
            let start = path.len() - name.len() + idx;
            &path[start..]
        }
        None => path,
    }
}

/// The filename truncated at its first dot, and to at most [`STEM_LEN`] characters.
pub fn stem(path: &str) -> &str {
    let name = filename_of(path);
    let end = name
        .char_indices()
        .take(STEM_LEN)
        .find(|&(_, c)| c == EXTENSION_SEPARATOR)
        .map(|(idx, _)| idx)
        .unwrap_or_else(|| {
            name.char_indices()
                .nth(STEM_LEN)
                .map(|(idx, _)| idx)
                .unwrap_or(name.len())
        });
    &name[..end]
}

/// The path with its last segment dropped.
///
/// `"src/a.c"` gives `"src"`, `"a.c"` gives `""`, `"/a.c"` gives `"/"`.
pub fn directory_of(path: &str) -> &str {
    match path.rfind(DIRECTORY_SEPARATOR) {
        Some(0) => &path[..1],
        Some(idx) => &path[..idx],
        None => "",
    }
}

pub fn has_extension(path: &str, extension: &str) -> bool {
    extension_of(path) == extension
}

pub fn is_source(path: &str) -> bool {
    has_extension(path, SOURCE_EXTENSION)
}

pub fn is_object(path: &str) -> bool {
    has_extension(path, OBJECT_EXTENSION)
}

/// Whether both paths name entries of the same directory.
pub fn same_directory(a: &str, b: &str) -> bool {
    directory_of(a) == directory_of(b)
}

/// Whether the directory of `candidate` starts with the directory of `root`.
///
/// This is a plain text prefix test: `tests_old/x.c` counts as lying under
/// `tests/`. A directory contains itself.
pub fn is_subdirectory(root: &str, candidate: &str) -> bool {
    directory_of(candidate).starts_with(directory_of(root))
}

/// Like [`is_subdirectory`], but the prefix must end on a segment boundary,
/// so `tests_old/x.c` is not inside `tests/`.
pub fn is_within_directory(root: &str, candidate: &str) -> bool {
    if !is_subdirectory(root, candidate) {
        return false;
    }

    let root_dir = directory_of(root);
    let rest = &directory_of(candidate)[root_dir.len()..];
    root_dir.is_empty()
        || root_dir.ends_with(DIRECTORY_SEPARATOR)
        || rest.is_empty()
        || rest.starts_with(DIRECTORY_SEPARATOR)
}

/// Append `name` to `base` as a new path segment.
pub fn append_directory(base: &mut String, name: &str) {
    if !base.is_empty() && !base.ends_with(DIRECTORY_SEPARATOR) {
        base.push(DIRECTORY_SEPARATOR);
    }
    base.push_str(name.trim_start_matches(DIRECTORY_SEPARATOR));
}

/// Path text with a trailing separator, so that [`directory_of`] yields the
/// directory itself.
pub fn as_directory(path: &Path) -> String {
    let mut text = path.to_string_lossy().into_owned();
    if !text.ends_with(DIRECTORY_SEPARATOR) {
        text.push(DIRECTORY_SEPARATOR);
    }
    text
}
