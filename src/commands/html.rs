//! Html command - exports a card as a standalone web page.

use std::io::Write;
use std::path::Path;

use super::shared::context_from_link;
use crate::error_fmt::{AppError, IoResultExt};
use crate::export::render_html;
use crate::GlobalConfig;

/// Render the card behind `link` as HTML, writing it to `output` or, when
/// no path is given, to `out`.
pub fn html(
    config: &GlobalConfig,
    link: Option<&str>,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let ctx = context_from_link(link);
    let url = ctx.share_url(&config.base_url)?;
    let page = render_html(&ctx, Some(url.as_str()))?;

    match output {
        Some(path) => {
            std::fs::write(path, &page)
                .with_context(&format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote card page");
            writeln!(out, "Wrote {}", path.display()).with_context("failed to write output")?;
        }
        None => {
            write!(out, "{}", page).with_context("failed to write output")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_html_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("card.html");

        let mut out = Vec::new();
        html(&GlobalConfig::default(), None, Some(&path), &mut out).unwrap();

        let page = std::fs::read_to_string(&path).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>Bingo</h1>"));
        assert!(String::from_utf8(out).unwrap().starts_with("Wrote "));
    }

    #[test]
    fn test_html_to_stdout() {
        let mut out = Vec::new();
        html(&GlobalConfig::default(), None, None, &mut out).unwrap();
        let page = String::from_utf8(out).unwrap();
        assert!(page.contains("FREE"));
    }
}
