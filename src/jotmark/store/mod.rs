//! # Storage Layer
//!
//! The [`StorageBackend`] trait is the persistence adapter for the note
//! collection: synchronous `load`/`save` of the whole collection as one
//! blob. Storage is abstracted behind a trait to:
//!
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing the collection logic
//! - Keep the synchronization rules **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file holding the full
//!   collection as an array of `{id, title, content}` objects. Loading is
//!   fail-soft: a missing, unreadable or unparseable file yields the seed
//!   collection (logged, never surfaced as an error).
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with optional
//!   write-failure injection to pin the logged-and-swallowed save contract.
//!
//! There is no incremental persistence: every save fully overwrites the
//! previous blob. The collection is the sole writer.

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;

/// Abstract interface for note persistence.
pub trait StorageBackend {
    /// Load the persisted collection.
    ///
    /// Implementations own their recovery policy; `FileStore` substitutes
    /// the seed collection rather than propagating read/parse failures.
    fn load(&self) -> Result<Vec<Note>>;

    /// Overwrite the persisted collection with `notes`.
    fn save(&mut self, notes: &[Note]) -> Result<()>;
}
