//! Timestamped backup copies.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};

/// Timestamp layout embedded in backup filenames.
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Upper bound on same-second name disambiguation attempts.
const MAX_STAMP_COLLISIONS: u32 = 1000;

/// Computes the backup destination for `path` at `stamp`.
///
/// The destination is the sibling `{path}.{YYYYmmdd_HHMMSS}`. If that
/// name is already taken (several backups within one second), an `_{n}`
/// suffix keeps the names unique and ordered.
pub fn backup_destination(path: &Path, stamp: DateTime<Utc>) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = format!("{}.{}", file_name, stamp.format(STAMP_FORMAT));

    let candidate = path.with_file_name(&base);
    if !candidate.exists() {
        return Ok(candidate);
    }
    for n in 1..MAX_STAMP_COLLISIONS {
        let candidate = path.with_file_name(format!("{}_{}", base, n));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(Error::Backup {
        path: path.to_path_buf(),
        source: std::io::Error::other("exhausted backup name candidates"),
    })
}

/// Copies `path` to its timestamped backup sibling and returns the
/// backup path.
///
/// The copy must happen before any mutation of `path`; a failure here
/// aborts the whole write so the pre-change bytes are never lost.
pub fn create_backup(path: &Path, stamp: DateTime<Utc>) -> Result<PathBuf> {
    let dest = backup_destination(path, stamp)?;
    fs::copy(path, &dest).map_err(|e| Error::Backup {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(backup = %dest.display(), "created backup copy");
    Ok(dest)
}
