//! Sentinel marker text for managed blocks.
//!
//! The marker is the free text embedded in both sentinel comment lines:
//! ```text
//! # BEGIN <marker text>
//! # END <marker text>
//! ```
//! Different tools managing the same file coexist by choosing different
//! marker texts.

use crate::error::{Error, Result};

/// Marker text used when the caller does not supply one.
pub const DEFAULT_MARKER_TEXT: &str = "ANSIBLE MANAGED BLOCK - Application Properties";

pub(crate) const BEGIN_KEYWORD: &str = "BEGIN";
pub(crate) const END_KEYWORD: &str = "END";

/// How a raw line relates to a given marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sentinel {
    Begin,
    End,
    None,
}

/// Validated marker text for one managed block.
///
/// The text is stored trimmed and goes verbatim into the sentinel
/// lines, so it must be a single non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    text: String,
}

impl Marker {
    /// Validates `text` and builds a marker from it.
    ///
    /// Surrounding whitespace is trimmed off first.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMarker`] if the text is blank or contains
    /// a line terminator.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidMarker {
                reason: "marker text is blank".to_string(),
            });
        }
        if text.contains('\n') || text.contains('\r') {
            return Err(Error::InvalidMarker {
                reason: "marker text contains a line terminator".to_string(),
            });
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// The raw marker text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The `# BEGIN <marker>` sentinel line.
    pub fn begin_line(&self) -> String {
        format!("# {} {}", BEGIN_KEYWORD, self.text)
    }

    /// The `# END <marker>` sentinel line.
    pub fn end_line(&self) -> String {
        format!("# {} {}", END_KEYWORD, self.text)
    }

    /// Classifies a raw line against this marker.
    ///
    /// A sentinel is a comment line whose body is the `BEGIN` or `END`
    /// keyword followed by exactly this marker's text. Surrounding
    /// whitespace is tolerated so hand-indented sentinels stay
    /// recognizable. Assignments, values, and comments that merely
    /// mention the marker text are plain content, so a block body may
    /// quote its own sentinels.
    pub(crate) fn classify(&self, line: &str) -> Sentinel {
        let Some(comment) = line.trim().strip_prefix('#') else {
            return Sentinel::None;
        };
        let body = comment.trim_start();
        if self.keyword_matches(body, BEGIN_KEYWORD) {
            Sentinel::Begin
        } else if self.keyword_matches(body, END_KEYWORD) {
            Sentinel::End
        } else {
            Sentinel::None
        }
    }

    /// Whether `body` is `keyword`, whitespace, then exactly this
    /// marker's text.
    fn keyword_matches(&self, body: &str, keyword: &str) -> bool {
        match body.strip_prefix(keyword) {
            Some(tail) => tail.starts_with(char::is_whitespace) && tail.trim() == self.text,
            None => false,
        }
    }
}
