//! Error types for props-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid marker text: {reason}")]
    InvalidMarker { reason: String },

    #[error("Corrupt managed block at line {line}: {reason}")]
    CorruptBlock { reason: String, line: usize },
}
