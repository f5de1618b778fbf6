//! Share command - copies a card's link to the clipboard.

use std::io::Write;

use super::shared::{context_from_link, emit_share_url};
use crate::error_fmt::AppError;
use crate::GlobalConfig;

/// Copy the share link for the card behind `link` (or the default card) to
/// the clipboard, and print it.
pub fn share(config: &GlobalConfig, link: Option<&str>, out: &mut impl Write) -> Result<(), AppError> {
    let ctx = context_from_link(link);
    emit_share_url(&ctx, config, true, out)
}
