//! Time source for backup naming.

use chrono::{DateTime, Utc};

/// Supplies the wall-clock instant embedded in backup filenames.
///
/// Injected into [`AtomicWriter`](crate::AtomicWriter) rather than read
/// from ambient process state, so callers and tests control the names
/// that backups end up with.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant, for deterministic backup names.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
