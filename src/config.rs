// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::{absolute_dir, normalize_extension};

pub const CONFIG_FILE_NAME: &str = ".twsize.toml";
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".html", ".blade.php"];
pub const DEFAULT_EXCLUDE_DIRS: [&str; 2] = ["vendor", "node_modules"];

/// Settings for a single run. Built once and never mutated while files are processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub root: PathBuf,
    /// Suffixes to match, each carrying exactly one leading dot.
    pub extensions: Vec<String>,
    /// Directory names; a file is skipped when its parent path contains one of these.
    pub exclude_dirs: Vec<String>,
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

impl RunConfig {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|&e| e.to_owned()).collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|&d| d.to_owned()).collect(),
            dry_run: false,
        }
    }

    /// Replaces the extension list. Entries are normalized and empty ones dropped.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    #[must_use]
    pub fn with_exclude_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_dirs = dirs
            .into_iter()
            .map(|d| d.as_ref().trim().to_owned())
            .filter(|d| !d.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Layers a config file over the current values. Keys absent from the file are left alone.
    #[must_use]
    pub fn merge_file(self, file: FileConfig) -> Self {
        let mut config = self;
        if let Some(extensions) = file.extensions {
            config = config.with_extensions(extensions);
        }
        if let Some(exclude) = file.exclude {
            config = config.with_exclude_dirs(exclude);
        }
        config
    }
}

/// Contents of a `.twsize.toml` file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub extensions: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

/// Looks for a `.twsize.toml` file starting at `dir` and walking up through
/// parent directories until one is found.
///
/// # Returns
///
/// * `Ok(Some((path, config)))` for the first file found
/// * `Ok(None)` if no ancestor has one
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined for a relative `dir`
/// * The config file exists but cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn load_config_file(dir: &Path) -> Result<Option<(PathBuf, FileConfig)>> {
    // `Path::new(".").parent()` runs out immediately, so walk from the absolute path.
    let mut current_dir = absolute_dir(dir)?;
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;
            let parsed: FileConfig = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_file.display())
            })?;
            return Ok(Some((config_file, parsed)));
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(None)
}
