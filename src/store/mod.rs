//! # Storage Layer
//!
//! The [`SnapshotStore`] trait abstracts where the snapshot document lives.
//!
//! - [`fs::FileStore`]: production storage, one JSON file holding the whole
//!   document, replaced atomically on every save.
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests.
//!
//! There are no partial writes: the in-memory snapshot is the single source
//! of truth, and every mutation rewrites the full document.

use crate::error::Result;
use crate::model::Snapshot;

pub mod fs;
pub mod memory;

/// Durable round-trip of the full domain state as one unit.
pub trait SnapshotStore {
    /// Read the persisted snapshot. A store with no prior state returns an
    /// empty snapshot; that is not an error.
    fn load(&self) -> Result<Snapshot>;

    /// Serialize the full snapshot and replace the durable copy. After any
    /// failure either the prior or the new document is observable, never a
    /// half-written one.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}
