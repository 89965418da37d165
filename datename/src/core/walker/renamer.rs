// src/core/walker/renamer.rs
use std::fs;
use std::io;
use std::path::Path;

/// Performs a single rename on behalf of the walker.
///
/// Any `FnMut(&Path, &Path) -> io::Result<()>` is a `Renamer`, which lets tests
/// record calls or inject failures without touching the filesystem.
pub trait Renamer {
    /// Moves `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the rename cannot be performed.
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

impl<F> Renamer for F
where
    F: FnMut(&Path, &Path) -> io::Result<()>,
{
    #[inline]
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        self(from, to)
    }
}

/// Renames on the real filesystem and never replaces an existing entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRenamer;

impl Renamer for FsRenamer {
    #[inline]
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if to.symlink_metadata().is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("target already exists: {}", to.display()),
            ));
        }
        fs::rename(from, to)
    }
}
