use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title shown when content yields no usable first line.
pub const UNTITLED: &str = "Untitled";

/// Body of a freshly created note, and the draft placeholder when the
/// collection is empty.
pub const NEW_NOTE_BODY: &str = "# New note";

const SEED_TITLE: &str = "First note";
const SEED_BODY: &str = "# Getting started\n\nEdit this text to begin.";

/// Opaque note identifier, millisecond-timestamp based.
///
/// Ids are assigned once at creation and never change. They serialize as a
/// bare number, so the stored blob stays a plain array of
/// `{id, title, content}` objects. Generation lives in the collection,
/// which clamps each new id to be strictly greater than the last issued
/// one (see `NoteCollection::next_id`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
    /// Creation time encoded in the id, if it is a plausible timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    /// A fresh note with placeholder title and body.
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            title: UNTITLED.to_string(),
            content: NEW_NOTE_BODY.to_string(),
        }
    }

    /// The single default note used when no valid persisted state exists.
    pub fn seed() -> Self {
        Self {
            id: NoteId(1),
            title: SEED_TITLE.to_string(),
            content: SEED_BODY.to_string(),
        }
    }
}

/// Derives a display title from note content: the first line with every
/// heading marker (`#`) removed and whitespace trimmed, falling back to
/// [`UNTITLED`] when nothing remains.
pub fn derive_title(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let stripped: String = first_line.chars().filter(|c| *c != '#').collect();
    let title = stripped.trim();
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_title_from_heading_line() {
        assert_eq!(derive_title("# Hello World\nbody text"), "Hello World");
    }

    #[test]
    fn blank_first_line_falls_back_to_placeholder() {
        assert_eq!(derive_title("   \nbody"), UNTITLED);
        assert_eq!(derive_title(""), UNTITLED);
        assert_eq!(derive_title("###\nbody"), UNTITLED);
    }

    #[test]
    fn strips_heading_markers_anywhere_in_the_line() {
        assert_eq!(derive_title("## C# notes ##"), "C notes");
        assert_eq!(derive_title("plain first line"), "plain first line");
    }

    #[test]
    fn note_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&NoteId(1700000000000)).unwrap();
        assert_eq!(json, "1700000000000");
    }

    #[test]
    fn note_json_matches_stored_shape() {
        let note = Note {
            id: NoteId(42),
            title: "T".into(),
            content: "C".into(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 42, "title": "T", "content": "C"})
        );
    }
}
