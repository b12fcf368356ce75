// src/core/discovery.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::RunConfig;
use crate::utils::{absolute_dir, normalize_extension};

/// Finds candidate files under a root directory.
///
/// Each extension gets its own recursive pass over the tree, so a file whose
/// name ends with two configured suffixes (say `.php` and `.blade.php`) is
/// yielded once per suffix.
#[derive(Debug)]
pub struct Discoverer {
    root: PathBuf,
    suffixes: Vec<Pattern>,
    exclude_dirs: Vec<String>,
}

impl Discoverer {
    /// Builds a discoverer for `root`.
    ///
    /// Extensions are normalized to a single leading dot; blank extensions and
    /// blank directory names are ignored.
    ///
    /// # Errors
    ///
    /// This function may return an error if a suffix cannot be compiled into a
    /// file-name pattern.
    pub fn new<E, D>(root: impl Into<PathBuf>, extensions: E, exclude_dirs: D) -> Result<Self>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .map(|suffix| {
                Pattern::new(&format!("*{}", Pattern::escape(&suffix)))
                    .with_context(|| format!("Invalid extension: {suffix}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let exclude_dirs = exclude_dirs
            .into_iter()
            .map(|d| d.as_ref().trim().to_owned())
            .filter(|d| !d.is_empty())
            .collect();

        Ok(Self {
            root: root.into(),
            suffixes,
            exclude_dirs,
        })
    }

    /// Builds a discoverer from a run configuration, resolving the root to an absolute path.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The current directory cannot be determined
    /// * An extension cannot be compiled into a file-name pattern
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        Self::new(
            absolute_dir(&config.root)?,
            &config.extensions,
            &config.exclude_dirs,
        )
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yields every candidate file, one full traversal per extension.
    ///
    /// Traversal order is whatever the directory walk produces. Errors hit
    /// while walking (an unreadable directory, a symlink loop) are yielded in
    /// place so the caller can report them and keep going.
    pub fn candidates(&self) -> impl Iterator<Item = walkdir::Result<PathBuf>> + '_ {
        self.suffixes.iter().flat_map(move |suffix| {
            WalkDir::new(&self.root)
                .follow_links(true)
                .into_iter()
                .filter_map(move |entry| match entry {
                    Ok(entry) => {
                        if !entry.file_type().is_file() || !has_suffix(suffix, entry.file_name()) {
                            return None;
                        }
                        let path = entry.into_path();
                        if self.is_excluded(&path) {
                            debug!(path = %path.display(), "skipping excluded file");
                            return None;
                        }
                        Some(Ok(path))
                    }
                    Err(err) => Some(Err(err)),
                })
        })
    }

    /// Returns `true` if the file's parent directory contains any excluded name.
    ///
    /// This is plain substring containment on the parent path relative to the
    /// root, so `my_vendor_backup/` is excluded by `vendor` just like `vendor/`.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };
        let relative = parent.strip_prefix(&self.root).unwrap_or(parent);
        let parent_str = relative.to_string_lossy();

        self.exclude_dirs
            .iter()
            .any(|dir| parent_str.contains(dir.as_str()))
    }
}

fn has_suffix(suffix: &Pattern, file_name: &std::ffi::OsStr) -> bool {
    file_name.to_str().is_some_and(|name| suffix.matches(name))
}
