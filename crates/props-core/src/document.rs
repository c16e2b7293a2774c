//! Line-oriented view of the target file.

/// A file's content split into lines.
///
/// Splitting is on `\n` only: a CRLF line keeps its `\r` as the last
/// character of the line text, so lines that are not touched re-render
/// byte-identically when joined back with `\n`. Whether the content
/// ended with a newline is remembered separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl SourceDocument {
    /// Parses raw file content.
    pub fn parse(content: &str) -> Self {
        if content.is_empty() {
            return Self {
                lines: Vec::new(),
                trailing_newline: false,
            };
        }
        let trailing_newline = content.ends_with('\n');
        let body = if trailing_newline {
            &content[..content.len() - 1]
        } else {
            content
        };
        Self {
            lines: body.split('\n').map(str::to_string).collect(),
            trailing_newline,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins lines back into file content.
    pub fn render(lines: &[String], trailing_newline: bool) -> String {
        let mut content = lines.join("\n");
        if trailing_newline {
            content.push('\n');
        }
        content
    }
}

/// Whether a line is empty or whitespace-only.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
