use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// One rewritable file, one unequal pair, one file under `vendor/`.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "a.html", "<div class=\"h-8 w-8\"></div>\n")?;
    create_test_file(&dir, "b.blade.php", "<div class=\"w-10 h-9\"></div>\n")?;
    create_test_file(&dir, "vendor/c.html", "<div class=\"h-5 w-5\"></div>\n")?;

    Ok(dir)
}
