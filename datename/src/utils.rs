// src/utils.rs
use crate::models::RenameOutcome;
use anyhow::{Context as _, Result, bail};
use std::fs;
use std::path::{Path, PathBuf, absolute};

/// Makes `dir` absolute and checks that it names an existing directory.
///
/// # Errors
///
/// This function returns an error if:
/// * The current directory cannot be determined
/// * The path does not exist or cannot be accessed
/// * The path exists but is not a directory
#[inline]
pub fn resolve_directory(dir: &Path) -> Result<PathBuf> {
    let absolute_dir = absolute(dir)
        .with_context(|| format!("Failed to resolve path: {}", dir.display()))?;

    let metadata = fs::metadata(&absolute_dir)
        .with_context(|| format!("Cannot access {}", absolute_dir.display()))?;
    if !metadata.is_dir() {
        bail!("The input path is not a directory: {}", absolute_dir.display());
    }

    Ok(absolute_dir)
}

/// The line printed for `outcome`, or `None` when nothing should be printed.
#[inline]
#[must_use]
pub fn format_outcome(outcome: &RenameOutcome) -> Option<String> {
    match outcome {
        RenameOutcome::Renamed { from, to } => Some(format!(
            "Renamed: {} ➝ {}",
            display_name(from),
            display_name(to)
        )),
        RenameOutcome::Unchanged { .. } => None,
        RenameOutcome::Failed { path, message, .. } => Some(format!(
            "Failed to rename {}: {message}",
            path.display()
        )),
    }
}

/// Prints successes to stdout and failures to stderr.
#[inline]
pub fn print_outcome(outcome: &RenameOutcome) {
    let Some(line) = format_outcome(outcome) else {
        return;
    };
    if outcome.is_failure() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
