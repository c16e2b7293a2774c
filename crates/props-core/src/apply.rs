//! File-level orchestration: read, reconcile, write atomically.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use props_blocks::{Marker, strip_block};
use props_fs::AtomicWriter;

use crate::diff;
use crate::document::{SourceDocument, is_blank};
use crate::error::Result;
use crate::property::PropertySet;
use crate::reconcile::{ReconcileOptions, reconcile};

/// Options for [`apply`].
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    /// Copy the current file to a timestamped sibling before writing.
    pub backup: bool,
    /// See [`ReconcileOptions::comment_existing`].
    pub comment_existing: bool,
    /// Managed-block marker text.
    pub marker: String,
    /// Report what would change without touching the file.
    pub check: bool,
    /// Include a unified diff in the report when content changes.
    pub diff: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            backup: false,
            comment_existing: true,
            marker: props_blocks::DEFAULT_MARKER_TEXT.to_string(),
            check: false,
            diff: false,
        }
    }
}

/// Options for [`remove`].
#[derive(Debug, Clone)]
pub struct RemoveOptions {
    /// Copy the current file to a timestamped sibling before writing.
    pub backup: bool,
    /// Managed-block marker text.
    pub marker: String,
    /// Report what would change without touching the file.
    pub check: bool,
}

impl Default for RemoveOptions {
    fn default() -> Self {
        Self {
            backup: false,
            marker: props_blocks::DEFAULT_MARKER_TEXT.to_string(),
            check: false,
        }
    }
}

/// Caller-facing result of [`apply`] and [`remove`].
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReport {
    /// Whether the file content changed (or would change in check mode).
    pub changed: bool,
    /// Human-readable outcome summary.
    pub msg: String,
    /// Properties written into the managed block.
    pub properties_added: usize,
    /// Existing lines commented out during this run.
    pub properties_commented: usize,
    /// Backup path, when one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_file: Option<PathBuf>,
    /// Unified diff of the change, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Reconciles the file at `path` against `desired` and writes the
/// result atomically.
///
/// A missing file is treated as empty, so the first apply creates it.
/// When the desired end-state already holds nothing is written at all:
/// no temp file, no backup, no new mtime. In check mode the report
/// describes what would change and the file is never touched.
pub fn apply(path: &Path, desired: &PropertySet, options: &ApplyOptions) -> Result<ApplyReport> {
    apply_with_writer(path, desired, options, &AtomicWriter::new())
}

/// [`apply`] with a caller-supplied writer, for pinned clocks or
/// alternate replace backends.
pub fn apply_with_writer(
    path: &Path,
    desired: &PropertySet,
    options: &ApplyOptions,
    writer: &AtomicWriter,
) -> Result<ApplyReport> {
    let current = read_or_empty(path)?;
    let outcome = reconcile(
        &current,
        desired,
        &ReconcileOptions {
            comment_existing: options.comment_existing,
            marker: options.marker.clone(),
        },
    )?;
    debug!(
        path = %path.display(),
        changed = outcome.changed,
        commented = outcome.properties_commented,
        "reconciled properties file"
    );

    if !outcome.changed {
        return Ok(ApplyReport {
            changed: false,
            msg: format!(
                "{} properties already reconciled",
                outcome.properties_added
            ),
            properties_added: outcome.properties_added,
            properties_commented: outcome.properties_commented,
            backup_file: None,
            diff: None,
        });
    }

    let diff_text = if options.diff {
        diff::unified(&current, &outcome.content)
    } else {
        None
    };

    if options.check {
        return Ok(ApplyReport {
            changed: true,
            msg: format!(
                "{} properties would be written, {} lines commented out",
                outcome.properties_added, outcome.properties_commented
            ),
            properties_added: outcome.properties_added,
            properties_commented: outcome.properties_commented,
            backup_file: None,
            diff: diff_text,
        });
    }

    let backup_file = writer.write(path, &outcome.content, options.backup)?;
    Ok(ApplyReport {
        changed: true,
        msg: format!(
            "{} properties written, {} lines commented out",
            outcome.properties_added, outcome.properties_commented
        ),
        properties_added: outcome.properties_added,
        properties_commented: outcome.properties_commented,
        backup_file,
        diff: diff_text,
    })
}

/// Strips the managed block for the configured marker from the file at
/// `path`.
///
/// The sentinel lines, the block body, and one blank separator line
/// immediately before the block are removed; commented-out lines stay
/// in place as the audit trail. A missing file or an absent block is a
/// clean no-op.
pub fn remove(path: &Path, options: &RemoveOptions) -> Result<ApplyReport> {
    remove_with_writer(path, options, &AtomicWriter::new())
}

/// [`remove`] with a caller-supplied writer.
pub fn remove_with_writer(
    path: &Path,
    options: &RemoveOptions,
    writer: &AtomicWriter,
) -> Result<ApplyReport> {
    let marker = Marker::new(options.marker.as_str())?;
    let current = read_or_empty(path)?;
    let document = SourceDocument::parse(&current);
    let (mut lines, span) = strip_block(document.lines(), &marker)?;

    let Some(span) = span else {
        return Ok(no_change_report("no managed block present"));
    };
    if span.start > 0 && is_blank(&lines[span.start - 1]) {
        lines.remove(span.start - 1);
    }

    let content = if lines.is_empty() {
        String::new()
    } else {
        SourceDocument::render(&lines, document.trailing_newline())
    };
    if content == current {
        return Ok(no_change_report("no managed block present"));
    }

    if options.check {
        return Ok(ApplyReport {
            changed: true,
            msg: "managed block would be removed".to_string(),
            properties_added: 0,
            properties_commented: 0,
            backup_file: None,
            diff: None,
        });
    }

    let backup_file = writer.write(path, &content, options.backup)?;
    debug!(path = %path.display(), "removed managed block");
    Ok(ApplyReport {
        changed: true,
        msg: "managed block removed".to_string(),
        properties_added: 0,
        properties_commented: 0,
        backup_file,
        diff: None,
    })
}

fn no_change_report(msg: &str) -> ApplyReport {
    ApplyReport {
        changed: false,
        msg: msg.to_string(),
        properties_added: 0,
        properties_commented: 0,
        backup_file: None,
        diff: None,
    }
}

/// Reads the target file, treating a missing file as empty content.
fn read_or_empty(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(props_fs::Error::io(path, e).into()),
    }
}
