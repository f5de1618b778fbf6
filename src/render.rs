//! Terminal drawing of a bingo card.

use owo_colors::OwoColorize;

use crate::context::{BingoContext, Coord, GlobalConfig};

const ELLIPSIS: char = '…';

/// Cell geometry and styling for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub cell_width: usize,
    pub cell_height: usize,
    pub color: bool,
}

impl RenderOptions {
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            color: config.color,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

/// Fit `text` into a box of `width` columns and at most `height` lines.
///
/// Words are wrapped greedily, words wider than the box are broken, and text
/// that still does not fit ends in an ellipsis.
pub fn fit_text(text: &str, width: usize, height: usize) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(width) {
            let piece: String = chunk.iter().collect();
            let current_len = current.chars().count();
            if current.is_empty() {
                current = piece;
            } else if current_len + 1 + chunk.len() <= width && chunk.len() == chars.len() {
                current.push(' ');
                current.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > height {
        lines.truncate(height);
        if let Some(last) = lines.last_mut() {
            let kept: String = last.chars().take(width - 1).collect();
            *last = format!("{}{}", kept, ELLIPSIS);
        }
    }
    lines
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Render the card title and grid for the terminal.
///
/// Column numbers run across the top and row numbers down the left, matching
/// the `X Y` coordinates used to mark cells. A marked cell has `=` along its
/// top edge and, with color on, highlighted text. The center cell is bold.
pub fn render_card(ctx: &BingoContext, opts: &RenderOptions) -> String {
    let grid = ctx.grid();
    let size = grid.size();
    let width = opts.cell_width;
    let gutter = (size.saturating_sub(1)).to_string().len() + 1;
    let total_width = size * (width + 1) + 1;

    let mut out = String::new();

    let title = center(&ctx.state().title, total_width);
    if opts.color {
        out.push_str(&format!("{}{}\n", " ".repeat(gutter), title.bold()));
    } else {
        out.push_str(&format!("{}{}\n", " ".repeat(gutter), title.trim_end()));
    }

    let mut header = " ".repeat(gutter + 1);
    for x in 0..size {
        header.push_str(&center(&x.to_string(), width));
        header.push(' ');
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for (y, row) in grid.rows().enumerate() {
        out.push_str(&border_line(ctx, y, size, width, gutter));

        let fitted: Vec<Vec<String>> = row
            .iter()
            .map(|cell| fit_text(cell, width, opts.cell_height))
            .collect();

        for line_idx in 0..opts.cell_height {
            let label = if line_idx == (opts.cell_height - 1) / 2 {
                y.to_string()
            } else {
                String::new()
            };
            out.push_str(&format!("{:<gutter$}|", label));

            for (x, lines) in fitted.iter().enumerate() {
                let coord = Coord::new(x, y);
                let top_pad = (opts.cell_height - lines.len()) / 2;
                let text = line_idx
                    .checked_sub(top_pad)
                    .and_then(|i| lines.get(i))
                    .map(String::as_str)
                    .unwrap_or("");
                let padded = center(text, width);
                out.push_str(&style_cell(ctx, coord, &padded, opts.color));
                out.push('|');
            }
            out.push('\n');
        }
    }
    out.push_str(&format!(
        "{}+{}+\n",
        " ".repeat(gutter),
        vec!["-".repeat(width); size].join("+")
    ));

    out
}

fn border_line(ctx: &BingoContext, y: usize, size: usize, width: usize, gutter: usize) -> String {
    let segments: Vec<String> = (0..size)
        .map(|x| {
            let fill = if ctx.is_selected(Coord::new(x, y)) { "=" } else { "-" };
            fill.repeat(width)
        })
        .collect();
    format!("{}+{}+\n", " ".repeat(gutter), segments.join("+"))
}

fn style_cell(ctx: &BingoContext, coord: Coord, padded: &str, color: bool) -> String {
    if !color {
        return padded.to_string();
    }
    let is_center = ctx.grid().center() == coord;
    match (ctx.is_selected(coord), is_center) {
        (true, true) => padded.black().on_green().bold().to_string(),
        (true, false) => padded.black().on_green().to_string(),
        (false, true) => padded.bold().to_string(),
        (false, false) => padded.to_string(),
    }
}

/// One-line summary of the card for status output.
pub fn summary(ctx: &BingoContext) -> String {
    let entries = ctx.state().entries().len();
    let size = ctx.grid().size();
    format!(
        "{} entries on a {}x{} grid, {} marked",
        entries,
        size,
        size,
        ctx.selection().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Action, BingoState};
    use regex::Regex;

    fn plain() -> RenderOptions {
        RenderOptions {
            cell_width: 8,
            cell_height: 2,
            color: false,
        }
    }

    #[test]
    fn test_fit_text_wraps_words() {
        assert_eq!(fit_text("late to the meeting", 8, 3), vec!["late to", "the", "meeting"]);
    }

    #[test]
    fn test_fit_text_breaks_long_words() {
        assert_eq!(
            fit_text("supercalifragilistic", 8, 3),
            vec!["supercal", "ifragili", "stic"]
        );
    }

    #[test]
    fn test_fit_text_truncates_with_ellipsis() {
        let lines = fit_text("one two three four five six", 5, 2);
        assert_eq!(lines, vec!["one", "two…"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 5));
    }

    #[test]
    fn test_fit_text_empty() {
        assert!(fit_text("", 8, 3).is_empty());
        assert!(fit_text("   ", 8, 3).is_empty());
        assert!(fit_text("x", 0, 3).is_empty());
    }

    #[test]
    fn test_render_plain_layout() {
        let ctx = BingoContext::new(BingoState::new("Tiny", "FREE", &["a", "b"]));
        let out = render_card(&ctx, &plain());

        let expected = [
            "         Tiny",
            "      0        1",
            "  +--------+--------+",
            "0 |   a    |   b    |",
            "  |        |        |",
            "  +--------+--------+",
            "1 |  FREE  |        |",
            "  |        |        |",
            "  +--------+--------+",
        ];
        assert_eq!(out.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_marked_cell_has_double_top_edge() {
        let mut ctx = BingoContext::new(BingoState::new("T", "FREE", &["a", "b"]));
        ctx.dispatch(Action::Toggle(Coord::new(1, 1))).unwrap();
        let out = render_card(&ctx, &plain());

        let marked = Regex::new(r"(?m)^  \+-{8}\+={8}\+$").unwrap();
        assert_eq!(marked.find_iter(&out).count(), 1);
    }

    #[test]
    fn test_render_standard_card_dimensions() {
        let ctx = BingoContext::default();
        let opts = RenderOptions {
            cell_width: 6,
            cell_height: 1,
            color: false,
        };
        let out = render_card(&ctx, &opts);

        let row = Regex::new(r"(?m)^\d \|(.{6}\|){5}$").unwrap();
        assert_eq!(row.find_iter(&out).count(), 5);
        assert!(out.contains("| FREE |"));
    }

    #[test]
    fn test_summary() {
        let ctx = BingoContext::default();
        assert_eq!(summary(&ctx), "24 entries on a 5x5 grid, 0 marked");
    }
}
