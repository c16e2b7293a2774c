//! Crash-safe file replacement for properties reconciliation.
//!
//! [`AtomicWriter`] implements the backup, temp-file, rename protocol:
//! at every point in time the target path holds either the previous
//! content or the new content, never a torn write. Two collaborators
//! are injected instead of ambient: the [`Clock`] that names
//! timestamped backups and the [`ReplaceBackend`] that performs the
//! final swap, so tests can pin timestamps and inject replace faults.

pub mod backup;
pub mod clock;
pub mod error;
pub mod io;

pub use backup::{backup_destination, create_backup};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use io::{AtomicWriter, FsReplace, ReplaceBackend};
