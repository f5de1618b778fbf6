//! New command - builds a card and prints its share link.

use std::io::Write;
use std::path::PathBuf;

use super::shared::{emit_share_url, read_entries_file};
use crate::context::{DEFAULT_CENTER_CELL, DEFAULT_TITLE};
use crate::error_fmt::AppError;
use crate::{Action, BingoContext, BingoState, GlobalConfig};

/// Fields for a new card. Anything left unset takes the default card's value.
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    pub title: Option<String>,
    pub center: Option<String>,
    /// Entries given one by one on the command line.
    pub entries: Vec<String>,
    /// File holding the entries block, one entry per line (`-` for stdin).
    pub entries_file: Option<PathBuf>,
    pub shuffle: bool,
    pub copy: bool,
}

/// Build the card described by `opts` without printing anything.
pub fn build_card(opts: &NewOptions) -> Result<BingoContext, AppError> {
    let defaults = BingoState::default();
    let entries_text = match (&opts.entries_file, opts.entries.is_empty()) {
        (Some(path), _) => read_entries_file(path)?,
        (None, false) => opts.entries.join("\n"),
        (None, true) => defaults.entries_text,
    };

    let state = BingoState {
        title: opts.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        center_cell: opts
            .center
            .clone()
            .unwrap_or_else(|| DEFAULT_CENTER_CELL.to_string()),
        entries_text,
    };

    let mut ctx = BingoContext::new(state);
    if opts.shuffle {
        ctx.dispatch(Action::Shuffle)?;
    }
    Ok(ctx)
}

/// Create a new card and print its share link.
pub fn new(config: &GlobalConfig, opts: &NewOptions, out: &mut impl Write) -> Result<(), AppError> {
    let ctx = build_card(opts)?;
    tracing::info!(
        entries = ctx.state().entries().len(),
        size = ctx.grid().size(),
        "created card"
    );
    emit_share_url(&ctx, config, opts.copy, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::shared::context_from_link;
    use tempfile::TempDir;

    fn quiet_config() -> GlobalConfig {
        let mut config = GlobalConfig::default();
        config.clipboard.enabled = false;
        config
    }

    #[test]
    fn test_new_defaults() {
        let ctx = build_card(&NewOptions::default()).unwrap();
        assert_eq!(ctx.state(), &BingoState::default());
    }

    #[test]
    fn test_new_with_entries() {
        let opts = NewOptions {
            title: Some("Road trip".to_string()),
            center: Some("GAS".to_string()),
            entries: vec!["cow".to_string(), "barn".to_string(), "tractor".to_string()],
            ..Default::default()
        };
        let ctx = build_card(&opts).unwrap();
        assert_eq!(ctx.state(), &BingoState::new("Road trip", "GAS", &["cow", "barn", "tractor"]));
        assert_eq!(ctx.grid().size(), 2);
    }

    #[test]
    fn test_new_entries_file_wins() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("entries.txt");
        std::fs::write(&path, "x\ny\n").unwrap();

        let opts = NewOptions {
            entries: vec!["ignored".to_string()],
            entries_file: Some(path),
            ..Default::default()
        };
        let ctx = build_card(&opts).unwrap();
        assert_eq!(ctx.state().entries(), vec!["x", "y"]);
    }

    #[test]
    fn test_new_shuffle_keeps_entries() {
        let opts = NewOptions {
            shuffle: true,
            ..Default::default()
        };
        let ctx = build_card(&opts).unwrap();
        let mut entries = ctx.state().entries();
        entries.sort_by_key(|e| e.parse::<u32>().unwrap_or(0));
        assert_eq!(entries, BingoState::default().entries());
    }

    #[test]
    fn test_new_prints_decodable_link() {
        let opts = NewOptions {
            title: Some("Printed".to_string()),
            ..Default::default()
        };
        let mut out = Vec::new();
        new(&quiet_config(), &opts, &mut out).unwrap();

        let link = String::from_utf8(out).unwrap();
        let ctx = context_from_link(Some(link.trim()));
        assert_eq!(ctx.state().title, "Printed");
    }
}
