//! Error types for props-core

/// Result type for props-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during reconciliation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller-supplied inputs cannot be reconciled
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Managed-block error from props-blocks
    #[error(transparent)]
    Blocks(#[from] props_blocks::Error),

    /// Filesystem error from props-fs
    #[error(transparent)]
    Fs(#[from] props_fs::Error),
}
