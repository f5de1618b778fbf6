//! Shuffle command - reorders a card's entries and prints the new link.

use std::io::Write;

use super::shared::{context_from_link, emit_share_url};
use crate::error_fmt::AppError;
use crate::{Action, GlobalConfig};

/// Shuffle the entries of the card behind `link`.
pub fn shuffle(
    config: &GlobalConfig,
    link: &str,
    copy: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let mut ctx = context_from_link(Some(link));
    ctx.dispatch(Action::Shuffle)?;
    emit_share_url(&ctx, config, copy, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec, BingoState};

    #[test]
    fn test_shuffle_preserves_card() {
        let state = BingoState::new("Shuffled", "MID", &["a", "b", "c", "d", "e"]);
        let token = codec::encode(&state).unwrap();

        let mut config = GlobalConfig::default();
        config.clipboard.enabled = false;
        let mut out = Vec::new();
        shuffle(&config, &token, false, &mut out).unwrap();

        let link = String::from_utf8(out).unwrap();
        let shuffled = context_from_link(Some(link.trim()));
        assert_eq!(shuffled.state().title, "Shuffled");
        assert_eq!(shuffled.state().center_cell, "MID");

        let mut entries = shuffled.state().entries();
        entries.sort();
        assert_eq!(entries, vec!["a", "b", "c", "d", "e"]);
    }
}
