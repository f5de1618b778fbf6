pub mod clipboard;
pub mod commands;
pub mod context;
pub mod error_fmt;
pub mod export;
pub mod render;

// Re-export commonly used types from context module for convenience
pub use context::{
    codec, Action, ActionError, BingoContext, BingoState, ClipboardConfig, Coord, DecodeError,
    EncodeError, GlobalConfig, GridLayout, SelectionSet, SettingsError, ShareUrlError,
};

use std::env;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Error type for editor resolution failures.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no editor found: {0}")]
    NotFound(String),
}

/// Resolves the user's preferred text editor and returns a Command ready to execute.
///
/// Resolution order:
/// 1. If `editor` is provided, use that directly
/// 2. Check `$EDITOR` environment variable
/// 3. Fall back to OS-specific default (nano on macOS/Linux, notepad on Windows)
///
/// The returned Command has the file path already added as an argument.
pub fn resolve_editor(editor: Option<&str>, file: &Path) -> Result<Command, EditorError> {
    let editor_name = editor_name(editor);

    if editor_name.is_empty() {
        return Err(EditorError::NotFound(
            "editor name is empty; set $EDITOR or pass an editor explicitly".to_string(),
        ));
    }

    let mut cmd = Command::new(&editor_name);
    cmd.arg(file);
    Ok(cmd)
}

/// The editor program `resolve_editor` would run.
pub fn editor_name(editor: Option<&str>) -> String {
    match editor {
        Some(e) => e.to_string(),
        None => env::var("EDITOR").unwrap_or_else(|_| default_editor().to_string()),
    }
}

/// Returns the default editor for the current OS.
fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "nano"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_editor() {
        let cmd = resolve_editor(Some("vim"), Path::new("/tmp/entries.txt")).unwrap();
        assert_eq!(cmd.get_program(), "vim");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["/tmp/entries.txt"]);
    }

    #[test]
    fn test_resolve_empty_editor_fails() {
        let err = resolve_editor(Some(""), Path::new("x")).unwrap_err();
        assert!(matches!(err, EditorError::NotFound(_)));
    }
}
