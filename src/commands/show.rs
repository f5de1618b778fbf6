//! Show command - draws a card in the terminal.

use std::io::Write;

use serde::Serialize;

use super::shared::context_from_link;
use crate::error_fmt::{AppError, IoResultExt};
use crate::render::{render_card, summary, RenderOptions};
use crate::{BingoContext, GlobalConfig};

/// Machine-readable view of a card, for `--json`.
#[derive(Debug, Serialize)]
struct CardJson<'a> {
    title: &'a str,
    centercell: &'a str,
    entries: Vec<&'a str>,
    size: usize,
    cells: &'a [String],
}

fn card_json(ctx: &BingoContext) -> CardJson<'_> {
    let state = ctx.state();
    let grid = ctx.grid();
    CardJson {
        title: &state.title,
        centercell: &state.center_cell,
        entries: state.entries(),
        size: grid.size(),
        cells: grid.cells(),
    }
}

/// Show the card behind `link`, or the default card.
pub fn show(
    config: &GlobalConfig,
    link: Option<&str>,
    json: bool,
    color: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let ctx = context_from_link(link);

    if json {
        let text = serde_json::to_string_pretty(&card_json(&ctx))
            .map_err(|e| AppError::Io {
                context: "failed to serialize card".to_string(),
                source: e.into(),
            })?;
        writeln!(out, "{}", text).with_context("failed to write output")?;
        return Ok(());
    }

    let opts = RenderOptions {
        color,
        ..RenderOptions::from_config(config)
    };
    write!(out, "{}", render_card(&ctx, &opts)).with_context("failed to write output")?;
    writeln!(out, "{}", summary(&ctx)).with_context("failed to write output")?;
    Ok(())
}
