//! Edit command - changes fields of a shared card and prints the new link.

use std::io::Write;
use std::path::PathBuf;

use super::shared::{context_from_link, edit_entries_in_editor, emit_share_url, read_entries_file};
use crate::error_fmt::AppError;
use crate::{Action, GlobalConfig};

/// Changes to apply to a card.
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub title: Option<String>,
    pub center: Option<String>,
    pub entries_file: Option<PathBuf>,
    /// Open the entries block in an editor, optionally naming the editor.
    pub editor: Option<Option<String>>,
    pub copy: bool,
}

impl EditOptions {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.center.is_none()
            && self.entries_file.is_none()
            && self.editor.is_none()
    }
}

/// Apply `opts` to the card behind `link` and print the updated link.
///
/// Field flags are applied first; `--editor` then opens the resulting
/// entries block.
pub fn edit(
    config: &GlobalConfig,
    link: &str,
    opts: &EditOptions,
    out: &mut impl Write,
) -> Result<(), AppError> {
    if opts.is_empty() {
        return Err(AppError::NoChangesProvided);
    }

    let mut ctx = context_from_link(Some(link));

    if let Some(title) = &opts.title {
        ctx.dispatch(Action::SetTitle(title.clone()))?;
    }
    if let Some(center) = &opts.center {
        ctx.dispatch(Action::SetCenterCell(center.clone()))?;
    }
    if let Some(path) = &opts.entries_file {
        ctx.dispatch(Action::SetEntries(read_entries_file(path)?))?;
    }
    if let Some(editor) = &opts.editor {
        let editor = editor.as_deref().or(config.editor.as_deref());
        let edited = edit_entries_in_editor(&ctx.state().entries_text, editor)?;
        ctx.dispatch(Action::SetEntries(edited))?;
    }

    emit_share_url(&ctx, config, opts.copy, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec, BingoState};
    use tempfile::TempDir;

    fn quiet_config() -> GlobalConfig {
        let mut config = GlobalConfig::default();
        config.clipboard.enabled = false;
        config
    }

    fn edited(link: &str, opts: &EditOptions) -> BingoState {
        let mut out = Vec::new();
        edit(&quiet_config(), link, opts, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        context_from_link(Some(printed.trim())).into_state()
    }

    #[test]
    fn test_edit_requires_changes() {
        let mut out = Vec::new();
        let err = edit(&quiet_config(), "x", &EditOptions::default(), &mut out).unwrap_err();
        assert!(matches!(err, AppError::NoChangesProvided));
        assert!(out.is_empty());
    }

    #[test]
    fn test_edit_title_keeps_entries() {
        let state = BingoState::new("Old", "FREE", &["a", "", "b"]);
        let token = codec::encode(&state).unwrap();

        let result = edited(
            &token,
            &EditOptions {
                title: Some("New".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result, BingoState::new("New", "FREE", &["a", "", "b"]));
    }

    #[test]
    fn test_edit_entries_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("entries.txt");
        std::fs::write(&path, "p\nq\n").unwrap();

        let result = edited(
            "not-a-token",
            &EditOptions {
                center: Some("Q".to_string()),
                entries_file: Some(path),
                ..Default::default()
            },
        );
        assert_eq!(result.title, "Bingo");
        assert_eq!(result.center_cell, "Q");
        assert_eq!(result.entries(), vec!["p", "q"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_with_noop_editor() {
        let state = BingoState::new("E", "FREE", &["keep", "me"]);
        let token = codec::encode(&state).unwrap();

        let result = edited(
            &token,
            &EditOptions {
                editor: Some(Some("true".to_string())),
                ..Default::default()
            },
        );
        assert_eq!(result, state);
    }
}
