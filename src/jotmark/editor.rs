use crate::error::{JotmarkError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const FALLBACK_EDITORS: &[&str] = &["vim", "vi", "nano"];

/// Resolves the editor command: $EDITOR, then $VISUAL, then common
/// fallbacks found on PATH.
fn editor_command() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(cmd) = env::var(var) {
            if !cmd.is_empty() {
                return Ok(cmd);
            }
        }
    }

    for candidate in FALLBACK_EDITORS {
        let found = Command::new("which")
            .arg(candidate)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if found {
            return Ok((*candidate).to_string());
        }
    }

    Err(JotmarkError::Shell(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor, waits for it to close and returns
/// the file's contents afterwards.
fn open_in_editor(path: &Path) -> Result<String> {
    let editor = editor_command()?;

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| JotmarkError::Shell(format!("Failed to launch editor '{}': {}", editor, e)))?;
    if !status.success() {
        return Err(JotmarkError::Shell(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(JotmarkError::Io)
}

/// Round-trips the draft buffer through the user's editor: writes
/// `initial` to a temporary markdown file, opens it, and returns the
/// edited text. The caller decides whether to commit it.
pub fn edit_draft(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join("jotmark_draft.md");
    fs::write(&temp_file, initial).map_err(JotmarkError::Io)?;

    let edited = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);
    edited
}
