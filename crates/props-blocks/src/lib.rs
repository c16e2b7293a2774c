//! Managed-block codec for properties files.
//!
//! A managed block is a machine-owned region of a line-oriented config
//! file, delimited by sentinel comment lines that embed a marker text:
//!
//! ```text
//! # BEGIN ANSIBLE MANAGED BLOCK - Application Properties
//! app.name=myapp
//! server.port=9090
//! # END ANSIBLE MANAGED BLOCK - Application Properties
//! ```
//!
//! The codec never patches a block in place. Callers strip the existing
//! block with [`strip_block`] and re-render it from scratch with
//! [`render_block`]; that is what keeps repeated reconciliation
//! byte-stable. Sentinel structure the codec cannot interpret
//! unambiguously (nested, duplicated, or unterminated blocks) is
//! rejected with [`Error::CorruptBlock`] instead of guessed at.

pub mod codec;
pub mod error;
pub mod marker;

pub use codec::{BlockSpan, find_block, render_block, strip_block};
pub use error::{Error, Result};
pub use marker::{DEFAULT_MARKER_TEXT, Marker};
