//! Shared utilities for commands: resolving links, printing share links,
//! and editor temp file management.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::clipboard;
use crate::context::codec;
use crate::error_fmt::{format_warning, AppError, IoResultExt};
use crate::{BingoContext, GlobalConfig};

/// Build a context from a link argument.
///
/// `link` may be a full share URL or a bare token. A missing link, a URL
/// without a `state` parameter, or an undecodable token all give the
/// default card.
pub fn context_from_link(link: Option<&str>) -> BingoContext {
    let token = link.and_then(codec::token_from_input);
    BingoContext::from_token(token.as_deref())
}

/// Read an entries block from a file, or from stdin when `path` is `-`.
///
/// The text is kept verbatim except for one trailing newline, which would
/// otherwise become an empty last entry.
pub fn read_entries_file(path: &Path) -> Result<String, AppError> {
    let content = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).with_context("failed to read entries from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(&format!("failed to read entries file {}", path.display()))?
    };
    Ok(strip_final_newline(content))
}

fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Print the share URL for the card, copying it to the clipboard first when
/// `copy` is set.
///
/// A failed clipboard write is logged and reported as a warning on stderr;
/// the URL is printed either way.
pub fn emit_share_url(
    ctx: &BingoContext,
    config: &GlobalConfig,
    copy: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let url = ctx.share_url(&config.base_url)?;

    if copy {
        copy_to_clipboard(config, url.as_str());
    }

    writeln!(out, "{}", url).with_context("failed to write output")?;
    Ok(())
}

/// Copy `text` to the clipboard. Returns whether the copy succeeded.
pub fn copy_to_clipboard(config: &GlobalConfig, text: &str) -> bool {
    match clipboard::copy(&config.clipboard, text) {
        Ok(()) => {
            eprintln!("Copied share link to clipboard");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            eprint!("{}", format_warning(&format!("could not copy to clipboard: {}", e)));
            false
        }
    }
}

/// Create a temp file containing an entries block.
///
/// The file is named `{ULID}_entries.txt` in the system temp directory.
pub fn make_temp_file(entries_text: &str) -> Result<PathBuf, AppError> {
    let ulid = ulid::Ulid::new();
    let path = std::env::temp_dir().join(format!("{}_entries.txt", ulid));

    let mut content = entries_text.to_string();
    content.push('\n');
    std::fs::write(&path, &content)
        .with_context(&format!("failed to write temp file {}", path.display()))?;

    Ok(path)
}

/// Open `entries_text` in an editor and return the edited block.
///
/// The temp file is removed after a successful edit and kept when the editor
/// fails, so nothing typed is lost.
pub fn edit_entries_in_editor(
    entries_text: &str,
    editor: Option<&str>,
) -> Result<String, AppError> {
    let path = make_temp_file(entries_text)?;
    let editor_name = crate::editor_name(editor);

    let status = crate::resolve_editor(editor, &path)?
        .status()
        .with_context(&format!("failed to launch editor '{}'", editor_name))?;

    if !status.success() {
        return Err(AppError::EditorFailed {
            editor: editor_name,
            temp_path: path.display().to_string(),
        });
    }

    let edited = std::fs::read_to_string(&path)
        .with_context(&format!("failed to read temp file {}", path.display()))?;
    if let Err(e) = std::fs::remove_file(&path) {
        tracing::debug!(error = %e, path = %path.display(), "could not remove temp file");
    }

    Ok(strip_final_newline(edited))
}
