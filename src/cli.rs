// src/cli.rs
use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{RunConfig, load_config_file};
use crate::core::runner::{print_summary, rewrite_directory};
use crate::models::RunSummary;
use crate::utils::split_list;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// File extensions to process (comma-separated, e.g. "html,blade.php")
    #[arg(short, long)]
    pub extensions: Option<String>,

    /// Directory names to skip (comma-separated, e.g. "vendor,node_modules")
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Ignore any .twsize.toml file
    #[arg(long)]
    pub no_config: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolves the effective configuration: flags, then `.twsize.toml`, then built-in defaults.
    ///
    /// # Errors
    ///
    /// This function may return an error if the config file cannot be read or parsed.
    pub fn resolve_config(&self) -> Result<RunConfig> {
        let mut config = RunConfig::new(&self.directory).with_dry_run(self.dry_run);

        if !self.no_config {
            if let Some((path, file)) = load_config_file(&self.directory)? {
                debug!(path = %path.display(), "loaded config file");
                config = config.merge_file(file);
            }
        }
        if let Some(extensions) = &self.extensions {
            config = config.with_extensions(split_list(extensions));
        }
        if let Some(exclude) = &self.exclude {
            config = config.with_exclude_dirs(split_list(exclude));
        }

        Ok(config)
    }
}

/// Runs one rewrite pass and prints the summary.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory does not exist
/// * The config file is unreadable or malformed
pub fn run(args: Args) -> Result<RunSummary> {
    // Checked before the config lookup, which would otherwise walk the missing
    // directory's ancestors and could fail on an unrelated config file first.
    if !args.directory.is_dir() {
        bail!("Directory does not exist: {}", args.directory.display());
    }

    let config = args.resolve_config()?;
    debug!(?config, "resolved configuration");

    println!("Starting Tailwind class replacement...");
    if config.dry_run {
        println!("Searching for files (dry run, no files will be modified)...\n");
    } else {
        println!("Searching for files...\n");
    }

    let summary = rewrite_directory(&config)?;
    print_summary(&summary, config.dry_run);
    Ok(summary)
}
