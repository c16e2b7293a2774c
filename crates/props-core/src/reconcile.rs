//! The reconcile algorithm.
//!
//! One pass over the current content: strip the existing managed block,
//! comment out active assignments of managed keys, then append a
//! freshly rendered block. The output is compared byte-for-byte against
//! the input, so running the same reconciliation twice reports no
//! change the second time.

use std::sync::LazyLock;

use regex::Regex;

use props_blocks::{Marker, render_block, strip_block};

use crate::document::{SourceDocument, is_blank};
use crate::error::{Error, Result};
use crate::property::PropertySet;

/// Annotation appended to every line the reconciler comments out.
pub const COMMENT_ANNOTATION: &str = "  # commented by ansible";

/// Matches an active `key=value` assignment; capture 1 is the key with
/// surrounding whitespace trimmed. Lines whose first non-blank
/// character is `#` are comments and never match.
static ASSIGNMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^#\s][^=]*?)\s*=").expect("Invalid assignment regex")
});

/// Policy knobs for one reconciliation.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Comment out active assignments of managed keys found outside the
    /// block. When false, stale duplicates stay active; property
    /// loaders that read the file top to bottom still end up with the
    /// block's values because the block is always last.
    pub comment_existing: bool,
    /// Sentinel marker text for the managed block.
    pub marker: String,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            comment_existing: true,
            marker: props_blocks::DEFAULT_MARKER_TEXT.to_string(),
        }
    }
}

/// Outcome of one reconciliation. Nothing on disk has changed yet;
/// [`apply`](crate::apply) is the step that writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The complete new file content.
    pub content: String,
    /// Whether `content` differs byte-for-byte from the input.
    pub changed: bool,
    /// Properties written into the managed block.
    pub properties_added: usize,
    /// Lines commented out outside the block during this run.
    pub properties_commented: usize,
}

/// Computes the reconciled content for `current`.
///
/// Lines that match no desired key are carried over byte-identically.
/// Active assignments of desired keys are commented out in place (all
/// occurrences, comments left alone) and the managed block is
/// re-rendered at the end of the file, separated from preceding
/// content by one blank line. The result always ends with a newline.
///
/// # Errors
/// Returns [`Error::InvalidInput`] when `desired` is empty,
/// [`props_blocks::Error::InvalidMarker`] for unusable marker text, and
/// [`props_blocks::Error::CorruptBlock`] when the existing sentinel
/// structure cannot be interpreted; in the corrupt case the input is
/// never partially rewritten.
pub fn reconcile(
    current: &str,
    desired: &PropertySet,
    options: &ReconcileOptions,
) -> Result<Reconciliation> {
    if desired.is_empty() {
        return Err(Error::InvalidInput {
            message: "desired property set is empty; nothing to manage".to_string(),
        });
    }
    let marker = Marker::new(options.marker.as_str())?;

    let document = SourceDocument::parse(current);
    let (mut lines, _) = strip_block(document.lines(), &marker)?;

    let mut commented = 0;
    if options.comment_existing {
        for line in &mut lines {
            let Some(key) = assignment_key(line) else {
                continue;
            };
            if desired.contains_key(key) {
                *line = neutralize(line);
                commented += 1;
            }
        }
    }

    // One blank line between existing content and the block; not
    // duplicated when the content already ends blank.
    match lines.last() {
        Some(last) if !is_blank(last) => lines.push(String::new()),
        _ => {}
    }
    lines.extend(render_block(desired.iter(), &marker));

    let content = SourceDocument::render(&lines, true);
    let changed = content != current;

    Ok(Reconciliation {
        content,
        changed,
        properties_added: desired.len(),
        properties_commented: commented,
    })
}

/// The trimmed key of an active assignment line, if the line is one.
fn assignment_key(line: &str) -> Option<&str> {
    ASSIGNMENT_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Comments out an active assignment, keeping its text as an audit
/// trail: `server.port=8080` becomes
/// `# server.port=8080  # commented by ansible`. A CRLF line keeps its
/// `\r` at the very end.
fn neutralize(line: &str) -> String {
    let (body, cr) = match line.strip_suffix('\r') {
        Some(stripped) => (stripped, "\r"),
        None => (line, ""),
    };
    format!("# {}{}{}", body, COMMENT_ANNOTATION, cr)
}
