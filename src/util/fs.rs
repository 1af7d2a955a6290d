//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;
use walkdir::WalkDir;

use crate::core::path::PathName;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Remove a single file.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("failed to remove file: {}", path.display()))
}

/// List the immediate entries of `dir` in file-name order.
///
/// A missing directory yields an empty list.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        entries.push(entry.into_path());
    }
    Ok(entries)
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

fn is_pattern(operand: &str) -> bool {
    operand.contains(['*', '?', '['])
}

/// Expand wildcard operands relative to `base`.
///
/// Plain operands pass through untouched. Matches are listed relative to
/// `base` in sorted order; a pattern that matches nothing is kept as written.
/// Matches that are not valid path names are dropped with a warning.
pub fn expand_operands(base: &Path, operands: Vec<PathName>) -> Vec<PathName> {
    let mut expanded = Vec::with_capacity(operands.len());

    for operand in operands {
        if !is_pattern(&operand) {
            expanded.push(operand);
            continue;
        }

        let full_pattern = base.join(operand.as_str());
        let matches: Vec<String> = match glob(&full_pattern.to_string_lossy()) {
            Ok(paths) => {
                let mut found: Vec<String> = paths
                    .filter_map(|entry| match entry {
                        Ok(path) => Some(path),
                        Err(e) => {
                            tracing::warn!("glob error: {}", e);
                            None
                        }
                    })
                    .map(|path| relative_path(base, &path).to_string_lossy().into_owned())
                    .collect();
                found.sort();
                found
            }
            Err(e) => {
                tracing::warn!("invalid pattern `{}`: {}", operand, e);
                Vec::new()
            }
        };

        if matches.is_empty() {
            expanded.push(operand);
        } else {
            tracing::debug!("expanded `{}` to {} operand(s)", operand, matches.len());
            for found in matches {
                match PathName::new(found) {
                    Ok(name) => expanded.push(name),
                    Err(e) => tracing::warn!("ignoring match of `{}`: {}", operand, e),
                }
            }
        }
    }

    expanded
}
