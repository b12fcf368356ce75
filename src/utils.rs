// src/utils.rs
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Trims the entry and gives it exactly one leading dot. Returns `None` for blank entries.
#[must_use]
pub fn normalize_extension(extension: &str) -> Option<String> {
    let bare = extension.trim().trim_start_matches('.');
    if bare.is_empty() {
        return None;
    }
    Some(format!(".{bare}"))
}

/// Splits a comma-separated flag value, dropping blank entries.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Resolves `dir` against the current working directory if it is relative.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}
