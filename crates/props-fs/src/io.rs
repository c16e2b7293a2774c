//! Atomic file replacement.
//!
//! Uses the write-to-temp-then-rename strategy: the target path always
//! holds either the previous content or the new content in full, never
//! a partial write. No advisory locks are taken; concurrent writers to
//! the same path race at the filesystem level and the last rename wins,
//! so callers that need mutual exclusion must serialize writes
//! themselves.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::backup;
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};

/// Swaps the fully written temp file into place at the target path.
///
/// The filesystem implementation is a single `rename`. Implementations
/// must uphold the same contract: after `replace` returns, readers of
/// `target` observe the new content in full; if it errors, `target`
/// still holds its previous content.
pub trait ReplaceBackend: Send + Sync {
    fn replace(&self, temp: &Path, target: &Path) -> std::io::Result<()>;
}

/// `std::fs::rename`-based replacement.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReplace;

impl ReplaceBackend for FsReplace {
    fn replace(&self, temp: &Path, target: &Path) -> std::io::Result<()> {
        // Windows cannot rename over an existing file. Removing the
        // target first opens a short window where it is absent, so on
        // that platform the guarantee weakens to replace-or-nothing.
        #[cfg(windows)]
        if target.exists() {
            fs::remove_file(target)?;
        }

        fs::rename(temp, target)
    }
}

/// Writes file content atomically: backup, temp file in the target
/// directory, durable flush, rename.
pub struct AtomicWriter {
    clock: Box<dyn Clock>,
    replace: Box<dyn ReplaceBackend>,
}

impl AtomicWriter {
    /// Writer backed by the system clock and a filesystem rename.
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
            replace: Box::new(FsReplace),
        }
    }

    /// Replaces the clock used for backup naming.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the rename backend.
    pub fn with_replace(mut self, replace: impl ReplaceBackend + 'static) -> Self {
        self.replace = Box::new(replace);
        self
    }

    /// Writes `content` to `path` atomically.
    ///
    /// When `backup` is true and `path` exists, the current bytes are
    /// first copied to a timestamped sibling and that path is returned.
    /// Any failure after the backup leaves the original file intact;
    /// the temp file is removed best-effort and is never the committed
    /// result.
    ///
    /// # Errors
    /// [`Error::Backup`] if the backup copy fails (nothing further is
    /// attempted), [`Error::PathNotFound`] if the parent directory is
    /// missing (directories are never created), and [`Error::Permission`]
    /// or [`Error::Io`] for the remaining failure modes.
    pub fn write(&self, path: &Path, content: &str, backup: bool) -> Result<Option<PathBuf>> {
        let backup_path = if backup && path.exists() {
            Some(backup::create_backup(path, self.clock.now())?)
        } else {
            None
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.is_dir() {
            return Err(Error::PathNotFound { path: parent });
        }

        // Temp file lives next to the target so the rename never
        // crosses a filesystem boundary.
        let temp_name = format!(
            ".{}.{}.tmp",
            path.file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default(),
            std::process::id()
        );
        let temp_path = path.with_file_name(&temp_name);

        if let Err(e) = write_temp(&temp_path, path, content) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        if let Err(e) = self.replace.replace(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(Error::io(path, e));
        }

        debug!(
            path = %path.display(),
            backup = backup_path.is_some(),
            "atomic write committed"
        );
        Ok(backup_path)
    }
}

impl Default for AtomicWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_temp(temp_path: &Path, target: &Path, content: &str) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| Error::io(temp_path, e))?;

    // Flush to disk before the rename makes the file visible
    temp_file
        .sync_all()
        .map_err(|e| Error::io(temp_path, e))?;

    // The rename adopts the temp file's mode, so carry the target's
    // permission bits over; a 0600 config must stay 0600.
    #[cfg(unix)]
    if let Ok(metadata) = fs::metadata(target) {
        fs::set_permissions(temp_path, metadata.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    Ok(())
}
