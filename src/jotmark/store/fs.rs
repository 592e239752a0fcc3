use super::StorageBackend;
use crate::error::{JotmarkError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name inside the data directory.
pub const NOTES_FILENAME: &str = "notes.json";

/// File-based storage: the whole collection lives in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(NOTES_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileStore {
    /// Fail-soft: a missing, unreadable or unparseable file yields the seed
    /// collection. Read and parse failures are logged, never propagated.
    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(vec![Note::seed()]);
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "could not read notes file {}: {}; starting from the seed note",
                    self.path.display(),
                    e
                );
                return Ok(vec![Note::seed()]);
            }
        };

        match serde_json::from_str(&raw) {
            Ok(notes) => Ok(notes),
            Err(e) => {
                log::warn!(
                    "notes file {} is not parseable: {}; starting from the seed note",
                    self.path.display(),
                    e
                );
                Ok(vec![Note::seed()])
            }
        }
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(JotmarkError::Io)?;
            }
        }
        let blob = serde_json::to_string_pretty(notes).map_err(JotmarkError::Serialization)?;
        fs::write(&self.path, blob).map_err(JotmarkError::Io)?;
        Ok(())
    }
}
