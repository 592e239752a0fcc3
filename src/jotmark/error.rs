use crate::model::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotmarkError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Shell(String),
}

pub type Result<T> = std::result::Result<T, JotmarkError>;
