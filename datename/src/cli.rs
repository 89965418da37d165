// src/cli.rs
use anyhow::{Result, bail};
use chrono::Local;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::walker::walk;
use crate::models::WalkSummary;
use crate::utils::resolve_directory;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory whose files are renamed, recursively
    pub directory: Option<PathBuf>,

    /// Ignored
    #[arg(hide = true)]
    pub extra: Vec<OsString>,

    /// Print diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    #[inline]
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Renames every file below `args.directory` and prints one line per rename.
///
/// # Errors
///
/// This function returns an error if:
/// * No directory was given
/// * The directory does not exist or is not a directory
/// * The directory itself cannot be listed
///
/// Failed renames of individual files are printed and counted in the returned
/// summary, they do not make this function fail.
#[inline]
pub fn run(args: Args) -> Result<WalkSummary> {
    let Some(directory) = args.directory else {
        bail!("no directory given (usage: datename <directory>)");
    };

    let root = resolve_directory(&directory)?;
    let outcomes = walk(&root, || Local::now().naive_local())?;
    println!("✅ Renaming completed.");

    Ok(WalkSummary::from_outcomes(&outcomes))
}
