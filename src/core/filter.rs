//! Operand list filtering.

use crate::core::path::{self, PathName};

/// Operands this short cannot carry a name and an extension.
const MIN_NAME_LEN: usize = 2;

/// Keep only the entries of `files` with the given extension.
///
/// Survivors keep their relative order. Entries of at most two characters are
/// rejected regardless of extension. The rejected entries are returned in their
/// original order so the caller can report each one.
pub fn keep_only(files: &mut Vec<PathName>, extension: &str) -> Vec<PathName> {
    let mut rejected = Vec::new();

    files.retain(|file| {
        let keep = file.chars().count() > MIN_NAME_LEN && path::has_extension(file, extension);
        if !keep {
            tracing::debug!("[*{}] rejecting {}", extension, file);
            rejected.push(file.clone());
        }
        keep
    });

    rejected
}
