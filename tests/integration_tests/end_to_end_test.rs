// tests/integration_tests/end_to_end_test.rs
use super::common::{setup_test_directory, snapshot};
use anyhow::Result;
use std::fs;
use twsize::{RunConfig, rewrite_directory};

#[test]
fn test_rewrite_default_config() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let summary = rewrite_directory(&RunConfig::new(temp_dir.path()))?;

    assert_eq!(summary.scanned, 2, "vendor/c.html must not be counted");
    assert_eq!(summary.updated, 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.html"))?,
        "<div class=\"size-8\"></div>"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("b.blade.php"))?,
        "<div class=\"w-10 h-9\"></div>"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("vendor/c.html"))?,
        "<div class=\"h-5 w-5\"></div>"
    );
    Ok(())
}

#[test]
fn test_dry_run_matches_real_run() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let before = snapshot(temp_dir.path())?;

    let dry = rewrite_directory(&RunConfig::new(temp_dir.path()).with_dry_run(true))?;
    assert_eq!(snapshot(temp_dir.path())?, before, "dry run must not touch files");

    let real = rewrite_directory(&RunConfig::new(temp_dir.path()))?;
    assert_eq!(dry.scanned, real.scanned);
    assert_eq!(dry.updated, real.updated);
    Ok(())
}

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    rewrite_directory(&RunConfig::new(temp_dir.path()))?;
    let after_first = snapshot(temp_dir.path())?;
    let summary = rewrite_directory(&RunConfig::new(temp_dir.path()))?;

    assert_eq!(summary.updated, 0);
    assert_eq!(snapshot(temp_dir.path())?, after_first);
    Ok(())
}

#[test]
fn test_missing_root_scans_nothing() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let missing = temp_dir.path().join("does-not-exist");

    let result = rewrite_directory(&RunConfig::new(&missing));

    assert!(result.is_err());
    assert!(!missing.exists());
    Ok(())
}
