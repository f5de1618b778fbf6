//! The shareable bingo card state.

use serde::{Deserialize, Serialize};

/// Title used when no shared state is present.
pub const DEFAULT_TITLE: &str = "Bingo";

/// Center cell text used when no shared state is present.
pub const DEFAULT_CENTER_CELL: &str = "FREE";

/// Number of placeholder entries (`"1"` through `"24"`) in a default card.
pub const DEFAULT_ENTRY_COUNT: usize = 24;

/// Title, center cell text and entries of a bingo card.
///
/// Entries are kept as the raw newline-delimited text block the user typed.
/// [`BingoState::entries`] splits it on `\n`, so an empty block yields a
/// single empty entry and blank lines are preserved as empty entries.
///
/// Field names are the wire names of the share token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoState {
    pub title: String,
    #[serde(rename = "centercell")]
    pub center_cell: String,
    #[serde(rename = "entries")]
    pub entries_text: String,
}

impl Default for BingoState {
    fn default() -> Self {
        let entries: Vec<String> = (1..=DEFAULT_ENTRY_COUNT).map(|i| i.to_string()).collect();
        Self {
            title: DEFAULT_TITLE.to_string(),
            center_cell: DEFAULT_CENTER_CELL.to_string(),
            entries_text: entries.join("\n"),
        }
    }
}

impl BingoState {
    /// Create a state from already-split entries.
    pub fn new(
        title: impl Into<String>,
        center_cell: impl Into<String>,
        entries: &[impl AsRef<str>],
    ) -> Self {
        Self {
            title: title.into(),
            center_cell: center_cell.into(),
            entries_text: join_entries(entries),
        }
    }

    /// The entries, one per line of the text block.
    pub fn entries(&self) -> Vec<&str> {
        self.entries_text.split('\n').collect()
    }

    /// Replace the entries with the given sequence, joined by newlines.
    pub fn set_entries(&mut self, entries: &[impl AsRef<str>]) {
        self.entries_text = join_entries(entries);
    }
}

fn join_entries(entries: &[impl AsRef<str>]) -> String {
    let lines: Vec<&str> = entries.iter().map(|e| e.as_ref()).collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = BingoState::default();
        assert_eq!(state.title, "Bingo");
        assert_eq!(state.center_cell, "FREE");

        let entries = state.entries();
        assert_eq!(entries.len(), 24);
        assert_eq!(entries.first(), Some(&"1"));
        assert_eq!(entries.last(), Some(&"24"));
    }

    #[test]
    fn test_empty_text_is_one_empty_entry() {
        let state = BingoState::new("t", "c", &[] as &[&str]);
        assert_eq!(state.entries_text, "");
        assert_eq!(state.entries(), vec![""]);
    }

    #[test]
    fn test_blank_lines_are_entries() {
        let state = BingoState {
            entries_text: "a\n\nb\n".to_string(),
            ..BingoState::default()
        };
        assert_eq!(state.entries(), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_set_entries_joins_with_newlines() {
        let mut state = BingoState::default();
        state.set_entries(&["x", "y", "z"]);
        assert_eq!(state.entries_text, "x\ny\nz");
    }
}
