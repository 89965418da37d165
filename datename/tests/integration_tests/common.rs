// tests/integration_tests/common.rs
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// 2025-03-05 09:07, which stamps names with `03052025_0907_`.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 5)
        .and_then(|date| date.and_hms_opt(9, 7, 0))
        .expect("valid timestamp")
}

pub fn sorted_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "Meeting Notes Jan 2024.md", "# Notes")?;
    create_test_file(temp_dir.path(), "Budget FY2025 (final).xlsx", "numbers")?;
    create_test_file(temp_dir.path(), ".hidden", "secret")?;
    create_test_file(temp_dir.path(), "archive/Old Report Dec 12.txt", "old")?;
    create_test_file(temp_dir.path(), "archive/2023/IMG_0001.png", "pixels")?;

    Ok(temp_dir)
}
