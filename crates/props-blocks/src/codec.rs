//! Locating, stripping, and rendering managed blocks.
//!
//! Operates on a file already split into lines. A managed block is
//! never edited in place: callers strip the whole block and re-render
//! it from the desired pairs, which keeps repeated runs byte-stable.

use tracing::debug;

use crate::error::{Error, Result};
use crate::marker::{Marker, Sentinel};

/// Position of a managed block within a line list, sentinels included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// 0-based index of the begin sentinel line.
    pub start: usize,
    /// 0-based index of the end sentinel line.
    pub end: usize,
}

impl BlockSpan {
    /// Index range of the block body, between the sentinels.
    pub fn body(&self) -> std::ops::Range<usize> {
        self.start + 1..self.end
    }
}

/// Finds the managed block for `marker`, if any.
///
/// Every line is scanned so that malformed sentinel structure anywhere
/// in the document is rejected before a caller mutates anything.
///
/// # Errors
/// Returns [`Error::CorruptBlock`] (with a 1-based line number) for a
/// begin sentinel inside an open block, an end sentinel without a
/// matching begin, a second block with the same marker, or an
/// unterminated block.
pub fn find_block(lines: &[String], marker: &Marker) -> Result<Option<BlockSpan>> {
    let mut open: Option<usize> = None;
    let mut found: Option<BlockSpan> = None;

    for (idx, line) in lines.iter().enumerate() {
        match marker.classify(line) {
            Sentinel::Begin => {
                if open.is_some() {
                    return Err(Error::CorruptBlock {
                        reason: "begin sentinel inside an open block".to_string(),
                        line: idx + 1,
                    });
                }
                if found.is_some() {
                    return Err(Error::CorruptBlock {
                        reason: "second managed block with the same marker".to_string(),
                        line: idx + 1,
                    });
                }
                open = Some(idx);
            }
            Sentinel::End => match open.take() {
                Some(start) => found = Some(BlockSpan { start, end: idx }),
                None => {
                    return Err(Error::CorruptBlock {
                        reason: "end sentinel without a matching begin".to_string(),
                        line: idx + 1,
                    });
                }
            },
            Sentinel::None => {}
        }
    }

    if let Some(start) = open {
        return Err(Error::CorruptBlock {
            reason: "unterminated managed block".to_string(),
            line: start + 1,
        });
    }

    Ok(found)
}

/// Removes the managed block for `marker` from `lines`.
///
/// Returns the remaining lines plus the span that was removed, or
/// `None` when no block was present. Lines outside the block are
/// carried over untouched.
pub fn strip_block(lines: &[String], marker: &Marker) -> Result<(Vec<String>, Option<BlockSpan>)> {
    let Some(span) = find_block(lines, marker)? else {
        return Ok((lines.to_vec(), None));
    };

    let mut kept = Vec::with_capacity(lines.len().saturating_sub(span.end - span.start + 1));
    kept.extend_from_slice(&lines[..span.start]);
    kept.extend_from_slice(&lines[span.end + 1..]);
    debug!(
        start = span.start + 1,
        end = span.end + 1,
        "stripped existing managed block"
    );
    Ok((kept, Some(span)))
}

/// Renders the managed block lines for `pairs`.
///
/// The caller supplies pairs in their final order; identical pairs and
/// marker always render identical lines.
pub fn render_block<'a, I>(pairs: I, marker: &Marker) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut lines = vec![marker.begin_line()];
    for (key, value) in pairs {
        lines.push(format!("{}={}", key, value));
    }
    lines.push(marker.end_line());
    lines
}
