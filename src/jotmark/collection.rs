use crate::model::{derive_title, Note, NoteId};
use crate::store::StorageBackend;
use chrono::Utc;

/// The ordered note collection: newest-created first, ids unique.
///
/// Owns the storage backend and is its sole writer. Every mutation
/// rewrites the whole persisted blob; write failures are logged and
/// swallowed, leaving the in-memory state authoritative for the rest of
/// the session.
pub struct NoteCollection<S: StorageBackend> {
    store: S,
    notes: Vec<Note>,
    last_id: i64,
}

impl<S: StorageBackend> NoteCollection<S> {
    /// Loads the persisted collection, falling back to the seed note if the
    /// backend cannot produce one.
    pub fn load(store: S) -> Self {
        let notes = match store.load() {
            Ok(notes) => notes,
            Err(e) => {
                log::warn!("could not load notes: {}; starting from the seed note", e);
                vec![Note::seed()]
            }
        };
        let last_id = notes.iter().map(|n| n.id.0).max().unwrap_or(0);
        Self {
            store,
            notes,
            last_id,
        }
    }

    /// Monotonic id generation: current time in milliseconds, clamped to be
    /// strictly greater than any id issued or loaded so far. Two creates in
    /// the same millisecond cannot collide.
    fn next_id(&mut self) -> NoteId {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        NoteId(self.last_id)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.notes) {
            log::warn!("failed to persist notes: {}; in-memory state kept", e);
        }
    }

    /// Creates a note with placeholder title and body at the front of the
    /// list and persists. Returns the new id so the caller can select it.
    pub fn create(&mut self) -> NoteId {
        let note = Note::new(self.next_id());
        let id = note.id;
        self.notes.insert(0, note);
        self.persist();
        id
    }

    /// Commits `draft` into the note with `id`: content is replaced and the
    /// title re-derived from the draft's first line. Persists. Returns
    /// `None` if no note has that id.
    pub fn commit(&mut self, id: NoteId, draft: &str) -> Option<&Note> {
        let pos = self.notes.iter().position(|n| n.id == id)?;
        let note = &mut self.notes[pos];
        note.title = derive_title(draft);
        note.content = draft.to_string();
        self.persist();
        Some(&self.notes[pos])
    }

    /// Removes the note with `id` and persists. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return false;
        }
        self.persist();
        true
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.get(id).is_some()
    }

    pub fn first_id(&self) -> Option<NoteId> {
        self.notes.first().map(|n| n.id)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
