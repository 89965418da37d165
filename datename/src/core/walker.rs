// src/core/walker.rs
pub mod renamer;
#[cfg(test)]
pub mod test_utils;

use anyhow::{Context as _, Result};
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::transform::transform;
use crate::models::{RenameOutcome, WalkSummary};
use crate::utils::print_outcome;

pub use renamer::{FsRenamer, Renamer};

/// Deepest directory level, counted from the root, whose files are renamed.
/// Directories at this level are not descended into.
pub const MAX_DEPTH: usize = 4096;

/// Renames every file under `root` to `transform(name, clock())`.
///
/// The clock is read once per file. Each outcome is printed as soon as it is
/// known, and the full list is returned once the walk is done.
///
/// # Errors
///
/// Fails if `root` or any directory below it cannot be listed. Failed renames
/// of individual files are reported as outcomes instead.
#[inline]
pub fn walk<C>(root: &Path, clock: C) -> Result<Vec<RenameOutcome>>
where
    C: Fn() -> NaiveDateTime,
{
    rename_tree(
        root,
        |name| transform(name, &clock()),
        &mut FsRenamer,
        print_outcome,
    )
}

/// Walks `root` depth first and renames every regular file to `new_name(name)`
/// within its own directory.
///
/// # Arguments
///
/// * `root` - The directory to process; the root itself is never renamed
/// * `new_name` - Maps a current file name to the desired one
/// * `renamer` - Performs each rename
/// * `report` - Called with every outcome as it happens
///
/// # Returns
///
/// * `Ok(Vec<RenameOutcome>)` - One outcome per file seen
///
/// # Errors
///
/// This function returns an error as soon as a directory cannot be listed.
/// Renames performed before that point are kept.
///
/// Directories are not renamed. Symlinks are not followed, and entries that
/// are neither files nor directories are skipped without an outcome. Each
/// directory is read completely before any of its files is renamed, so a new
/// name is never picked up a second time. A failed rename is recorded and the
/// walk moves on; earlier renames are kept.
#[inline]
pub fn rename_tree<N, R, F>(
    root: &Path,
    new_name: N,
    renamer: &mut R,
    mut report: F,
) -> Result<Vec<RenameOutcome>>
where
    N: Fn(&str) -> String,
    R: Renamer + ?Sized,
    F: FnMut(&RenameOutcome),
{
    info!(root = %root.display(), "renaming files");

    let mut outcomes = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(MAX_DEPTH)
        .follow_links(false)
        .sort_by_file_name()
    {
        let outcome = match entry {
            Ok(entry) => {
                let file_type = entry.file_type();
                if file_type.is_dir() {
                    if entry.depth() == MAX_DEPTH {
                        warn!(path = %entry.path().display(), "depth limit reached, not descending");
                    }
                    continue;
                }
                if !file_type.is_file() {
                    debug!(path = %entry.path().display(), "skipping special entry");
                    continue;
                }
                rename_file(entry.path(), &new_name, renamer)
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                return Err(err)
                    .with_context(|| format!("Failed to read directory: {}", path.display()));
            }
        };

        report(&outcome);
        outcomes.push(outcome);
    }

    let summary = WalkSummary::from_outcomes(&outcomes);
    info!(
        renamed = summary.renamed,
        unchanged = summary.unchanged,
        failed = summary.failed,
        "walk finished"
    );

    Ok(outcomes)
}

fn rename_file<N, R>(path: &Path, new_name: &N, renamer: &mut R) -> RenameOutcome
where
    N: Fn(&str) -> String,
    R: Renamer + ?Sized,
{
    let old_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let target = path.with_file_name(new_name(&*old_name));

    if target == path {
        debug!(path = %path.display(), "name already normalized");
        return RenameOutcome::Unchanged {
            path: path.to_path_buf(),
        };
    }

    debug!(from = %path.display(), to = %target.display(), "renaming");
    match renamer.rename(path, &target) {
        Ok(()) => RenameOutcome::Renamed {
            from: path.to_path_buf(),
            to: target,
        },
        Err(err) => RenameOutcome::Failed {
            path: path.to_path_buf(),
            target,
            message: err.to_string(),
        },
    }
}
