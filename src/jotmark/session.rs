//! Selection & draft controller.
//!
//! A [`Session`] tracks which note is current and holds the draft buffer —
//! the working copy shown in the editing surface, decoupled from the
//! collection until an explicit save. The selection state machine:
//!
//! - select / create: selection moves, the draft is unconditionally
//!   overwritten with the newly selected note's persisted content
//!   (creating auto-selects the new note)
//! - selecting the current note: no-op, in-progress edits survive
//! - deleting the selected note: selection moves to the new first note,
//!   or clears when the collection becomes empty (draft resets to the
//!   placeholder body)
//! - editing: only the draft mutates; the collection is untouched

use crate::collection::NoteCollection;
use crate::error::{JotmarkError, Result};
use crate::model::{Note, NoteId, NEW_NOTE_BODY};
use crate::store::StorageBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

/// A user-facing message produced by an operation. The shell decides how
/// to present it; the library never prints.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// The entry point for all note operations: owns the collection, the
/// selection and the draft buffer. Generic over the storage backend so
/// tests run against `InMemoryStore`.
pub struct Session<S: StorageBackend> {
    collection: NoteCollection<S>,
    selected: Option<NoteId>,
    draft: String,
}

impl<S: StorageBackend> Session<S> {
    /// Opens a session: loads (or seeds) the collection, selects the first
    /// note if there is one and syncs the draft to it.
    pub fn open(store: S) -> Self {
        let collection = NoteCollection::load(store);
        let mut session = Self {
            selected: collection.first_id(),
            collection,
            draft: String::new(),
        };
        session.sync_draft();
        session
    }

    pub fn notes(&self) -> &[Note] {
        self.collection.notes()
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.and_then(|id| self.collection.get(id))
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn store(&self) -> &S {
        self.collection.store()
    }

    /// Resynchronizes the draft to the selected note's persisted content,
    /// or to the placeholder body when nothing is selected. Unsaved edits
    /// are discarded by design.
    fn sync_draft(&mut self) {
        self.draft = self
            .selected
            .and_then(|id| self.collection.get(id))
            .map(|n| n.content.clone())
            .unwrap_or_else(|| NEW_NOTE_BODY.to_string());
    }

    /// Creates a note, selects it and resyncs the draft.
    pub fn add_note(&mut self) -> CmdResult {
        let id = self.collection.create();
        self.selected = Some(id);
        self.sync_draft();

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Note created."));
        result
    }

    /// Moves the selection to `id`, overwriting the draft with that note's
    /// persisted content. Selecting the current note is a no-op so
    /// in-progress edits survive.
    pub fn select_note(&mut self, id: NoteId) -> Result<()> {
        if self.selected == Some(id) {
            return Ok(());
        }
        if !self.collection.contains(id) {
            return Err(JotmarkError::NoteNotFound(id));
        }
        self.selected = Some(id);
        self.sync_draft();
        Ok(())
    }

    /// Replaces the draft buffer. The collection is untouched until save.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commits the draft into the selected note and persists. With no
    /// selection this is a no-op with a user-visible notice.
    pub fn save_note(&mut self) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        let Some(id) = self.selected else {
            result.add_message(CmdMessage::warning(
                "No note selected. Add a note first.",
            ));
            return Ok(result);
        };

        let draft = self.draft.clone();
        match self.collection.commit(id, &draft) {
            Some(note) => {
                result.add_message(CmdMessage::success(format!("Saved: {}", note.title)));
                Ok(result)
            }
            None => Err(JotmarkError::NoteNotFound(id)),
        }
    }

    /// Removes the selected note. `confirmed` carries the user's answer to
    /// the confirmation step: declining cancels without touching any state.
    /// After a removal the first remaining note is selected (its content
    /// loaded into the draft), or the selection clears.
    pub fn delete_note(&mut self, confirmed: bool) -> CmdResult {
        let mut result = CmdResult::default();
        let Some(id) = self.selected else {
            result.add_message(CmdMessage::info("No note selected."));
            return result;
        };
        if !confirmed {
            result.add_message(CmdMessage::info("Operation cancelled."));
            return result;
        }

        let title = self
            .collection
            .get(id)
            .map(|n| n.title.clone())
            .unwrap_or_default();
        self.collection.remove(id);
        self.selected = self.collection.first_id();
        self.sync_draft();

        result.add_message(CmdMessage::success(format!("Note deleted: {}", title)));
        result
    }
}
