use super::StorageBackend;
use crate::error::{JotmarkError, Result};
use crate::model::Note;

/// In-memory storage for testing and development.
/// Does NOT persist data across processes.
#[derive(Default)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `notes`, as if a previous session had
    /// saved them.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            fail_writes: false,
        }
    }

    /// Make every subsequent `save` fail, to exercise the fail-soft
    /// persistence contract.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The last successfully saved collection.
    pub fn stored(&self) -> &[Note] {
        &self.notes
    }
}

impl StorageBackend for InMemoryStore {
    fn load(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        if self.fail_writes {
            return Err(JotmarkError::Store("write failure injected".to_string()));
        }
        self.notes = notes.to_vec();
        Ok(())
    }
}
