//! Idempotent reconciliation of `key=value` properties files.
//!
//! The engine takes a file's current content and a desired
//! [`PropertySet`] and produces new content in which every unrelated
//! line is byte-identical, active assignments of managed keys are
//! commented out in place, and a sentinel-delimited managed block at
//! the end of the file carries the desired pairs. [`apply`] wires the
//! pure [`reconcile`] step to the atomic writer in `props-fs`; when the
//! desired end-state already holds, the file is not touched at all.
//!
//! # Example
//! ```
//! use props_core::{PropertySet, ReconcileOptions, reconcile};
//!
//! let desired = PropertySet::from_pairs([
//!     ("server.port", "9090"),
//!     ("app.name", "myapp"),
//! ])?;
//!
//! let current = "server.port=8080\ncustom.setting=value\n";
//! let outcome = reconcile(current, &desired, &ReconcileOptions::default())?;
//!
//! assert!(outcome.changed);
//! assert!(outcome.content.contains("# server.port=8080  # commented by ansible"));
//! assert!(outcome.content.contains("custom.setting=value"));
//! assert!(outcome.content.contains("server.port=9090"));
//! # Ok::<(), props_core::Error>(())
//! ```

pub mod apply;
pub mod diff;
pub mod document;
pub mod error;
pub mod property;
pub mod reconcile;

pub use apply::{
    ApplyOptions, ApplyReport, RemoveOptions, apply, apply_with_writer, remove,
    remove_with_writer,
};
pub use document::SourceDocument;
pub use error::{Error, Result};
pub use property::PropertySet;
pub use reconcile::{COMMENT_ANNOTATION, ReconcileOptions, Reconciliation, reconcile};
