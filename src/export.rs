//! Standalone HTML export of a card.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::context::{BingoContext, Coord};
use crate::render::fit_text;

/// Side of a cell's square, in CSS pixels.
pub const CELL_PX: u32 = 128;
const CELL_PADDING_PX: u32 = 8;
const MAX_FONT_PX: u32 = 48;
const MIN_FONT_PX: u32 = 8;

const CARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
  body { font-family: sans-serif; display: flex; flex-direction: column; align-items: center; }
  h1 { font-size: 3rem; }
  table { border-collapse: collapse; border: 4px solid #075985; }
  td { width: {{ cell_px }}px; height: {{ cell_px }}px; padding: {{ padding_px }}px; box-sizing: border-box;
       border: 4px solid #075985; background: #fff; color: #075985; text-align: center;
       overflow-wrap: anywhere; }
  td.center { font-weight: bold; }
  td.marked { background: #075985; color: #fff; }
</style>
</head>
<body>
<h1>{{ title }}</h1>
<table>
{%- for row in rows %}
  <tr>
  {%- for cell in row %}
    <td class="{{ cell.classes }}" style="font-size: {{ cell.font_px }}px">{{ cell.text }}</td>
  {%- endfor %}
  </tr>
{%- endfor %}
</table>
{%- if share_url %}
<p><a href="{{ share_url }}">Share this card</a></p>
{%- endif %}
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct CellView {
    text: String,
    classes: String,
    font_px: u32,
}

/// Largest font size, in pixels, at which `text` fits a cell without
/// overflowing.
///
/// Glyphs are estimated at 0.6em wide and lines at 1.2em tall.
pub fn fit_font_px(text: &str) -> u32 {
    let inner = (CELL_PX - 2 * CELL_PADDING_PX) as f32;
    let mut px = MAX_FONT_PX;
    while px > MIN_FONT_PX {
        let cols = (inner / (0.6 * px as f32)) as usize;
        let rows = (inner / (1.2 * px as f32)) as usize;
        if cols > 0 && fit_text(text, cols, usize::MAX).len() <= rows {
            return px;
        }
        px -= 2;
    }
    MIN_FONT_PX
}

/// Render the card as a self-contained HTML page.
///
/// Marked cells carry the `marked` class and the center cell the `center`
/// class. `share_url`, when given, is linked under the grid.
pub fn render_html(ctx: &BingoContext, share_url: Option<&str>) -> Result<String, minijinja::Error> {
    let grid = ctx.grid();
    let center = grid.center();

    let rows: Vec<Vec<CellView>> = grid
        .rows()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, text)| {
                    let coord = Coord::new(x, y);
                    let mut classes = Vec::new();
                    if coord == center {
                        classes.push("center");
                    }
                    if ctx.is_selected(coord) {
                        classes.push("marked");
                    }
                    CellView {
                        text: text.clone(),
                        classes: classes.join(" "),
                        font_px: fit_font_px(text),
                    }
                })
                .collect()
        })
        .collect();

    let mut env = Environment::new();
    env.add_template("card.html", CARD_TEMPLATE)?;
    let template = env.get_template("card.html")?;
    template.render(context! {
        title => ctx.state().title.as_str(),
        rows => rows,
        cell_px => CELL_PX,
        padding_px => CELL_PADDING_PX,
        share_url => share_url,
    })
}
