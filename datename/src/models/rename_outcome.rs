// src/models/rename_outcome.rs
use std::path::{Path, PathBuf};

/// What happened to one entry during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was moved from `from` to `to`.
    Renamed { from: PathBuf, to: PathBuf },
    /// The computed name equals the current one; nothing was done.
    Unchanged { path: PathBuf },
    /// Renaming `path` to `target` failed with `message`.
    Failed {
        path: PathBuf,
        target: PathBuf,
        message: String,
    },
}

impl RenameOutcome {
    /// The path the entry had before the walk touched it.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Renamed { from, .. } => from,
            Self::Unchanged { path } | Self::Failed { path, .. } => path,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
