// src/core/runner.rs
use anyhow::{Context as _, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::RunConfig;
use crate::core::discovery::Discoverer;
use crate::core::rewriter::replace_size_classes;
use crate::models::{FileOutcome, RunSummary};

/// Rewrites one file, or reports what would change under dry-run.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read or is not valid UTF-8
/// * The rewritten content cannot be written back
#[inline]
pub fn process_file(path: &Path, dry_run: bool) -> Result<FileOutcome> {
    let content = fs::read_to_string(path).context("Failed to read file")?;

    let new_content = replace_size_classes(&content);
    if new_content == content {
        return Ok(FileOutcome::Unchanged);
    }

    if dry_run {
        return Ok(FileOutcome::WouldUpdate);
    }

    fs::write(path, new_content).context("Failed to write file")?;
    Ok(FileOutcome::Updated)
}

/// Scans the configured root and rewrites every candidate file.
///
/// Prints one status line per candidate and returns the accumulated counts.
/// Per-file failures are printed and counted but never stop the run.
///
/// A file yielded twice (overlapping extensions) is rewritten on the first
/// visit and unchanged on the second. Under dry-run nothing is written, so
/// the second visit of a would-update file is reported as unchanged too and
/// both modes end with the same counts.
///
/// # Errors
///
/// This function may return an error if:
/// * The root directory does not exist or is not a directory
/// * The current directory cannot be determined for a relative root
/// * An extension cannot be compiled into a file-name pattern
pub fn rewrite_directory(config: &RunConfig) -> Result<RunSummary> {
    if !config.root.is_dir() {
        bail!("Directory does not exist: {}", config.root.display());
    }

    let discoverer = Discoverer::from_config(config)?;
    let mut summary = RunSummary::new();
    let mut pending_writes: HashSet<PathBuf> = HashSet::new();

    for candidate in discoverer.candidates() {
        let path = match candidate {
            Ok(path) => path,
            Err(err) => {
                let location = err.path().unwrap_or_else(|| discoverer.root()).display();
                debug!(error = %err, "directory walk failed");
                println!("✗ Error processing {location}: {err}");
                summary.record_walk_error();
                continue;
            }
        };

        if config.dry_run && pending_writes.contains(&path) {
            print_outcome(&path, FileOutcome::Unchanged);
            summary.record(FileOutcome::Unchanged);
            continue;
        }

        match process_file(&path, config.dry_run) {
            Ok(outcome) => {
                if outcome == FileOutcome::WouldUpdate {
                    pending_writes.insert(path.clone());
                }
                print_outcome(&path, outcome);
                summary.record(outcome);
            }
            Err(err) => {
                println!("✗ Error processing {}: {err:#}", path.display());
                summary.record_file_error();
            }
        }
    }

    Ok(summary)
}

fn print_outcome(path: &Path, outcome: FileOutcome) {
    match outcome {
        FileOutcome::Updated => println!("✓ Updated: {}", path.display()),
        FileOutcome::WouldUpdate => println!("~ Would update: {}", path.display()),
        FileOutcome::Unchanged => println!("- Skipped: {} (no changes needed)", path.display()),
    }
}

/// Prints the end-of-run counts.
pub fn print_summary(summary: &RunSummary, dry_run: bool) {
    println!("\nSummary:");
    println!("Files scanned: {}", summary.scanned);
    if dry_run {
        println!("Files that would be updated: {}", summary.updated);
    } else {
        println!("Files updated: {}", summary.updated);
    }
    if summary.errors > 0 {
        println!("Errors: {}", summary.errors);
    }
}
