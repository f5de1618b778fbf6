//! Play command - an interactive session for marking cells.
//!
//! The session reads one command per line. Marks live only for the session;
//! the share link never carries them.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;

use super::shared::{context_from_link, copy_to_clipboard, edit_entries_in_editor};
use crate::error_fmt::{format_warning, AppError, IoResultExt};
use crate::render::{render_card, summary, RenderOptions};
use crate::{Action, BingoContext, Coord, GlobalConfig};

const HELP: &str = "\
Commands:
  toggle X Y   mark or unmark the cell in column X, row Y (alias: t)
  shuffle      reorder the entries; marks stay on their cells
  title TEXT   change the title
  center TEXT  change the center cell text
  edit         edit the entries in your editor
  show         draw the card again
  url          print the share link
  copy         copy the share link to the clipboard
  help         show this help
  quit         leave the session (alias: q, exit)";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Act(Action),
    EditEntries,
    Show,
    Url,
    Copy,
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse to `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<PlayCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "toggle" | "t" => PlayCommand::Act(Action::Toggle(parse_coord(rest)?)),
        "shuffle" => PlayCommand::Act(Action::Shuffle),
        "title" => PlayCommand::Act(Action::SetTitle(rest.to_string())),
        "center" => PlayCommand::Act(Action::SetCenterCell(rest.to_string())),
        "edit" => PlayCommand::EditEntries,
        "show" => PlayCommand::Show,
        "url" => PlayCommand::Url,
        "copy" => PlayCommand::Copy,
        "help" | "?" => PlayCommand::Help,
        "quit" | "q" | "exit" => PlayCommand::Quit,
        other => return Err(format!("unknown command '{}'; type 'help'", other)),
    };
    Ok(Some(command))
}

fn parse_coord(args: &str) -> Result<Coord, String> {
    let parts: Vec<&str> = args
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    let [x, y] = parts.as_slice() else {
        return Err("toggle needs a column and a row, e.g. 'toggle 2 3'".to_string());
    };
    let x = x
        .parse()
        .map_err(|_| format!("column '{}' is not a number", x))?;
    let y = y
        .parse()
        .map_err(|_| format!("row '{}' is not a number", y))?;
    Ok(Coord::new(x, y))
}

/// Run a play session for the card behind `link`, reading commands from
/// `input` until it ends or the player quits.
///
/// Returns the final context so callers can inspect the session's outcome.
pub fn play(
    config: &GlobalConfig,
    link: Option<&str>,
    color: bool,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<BingoContext, AppError> {
    let mut ctx = context_from_link(link);
    let opts = RenderOptions {
        color,
        ..RenderOptions::from_config(config)
    };

    draw(&ctx, &opts, out)?;
    writeln!(out, "Type 'help' for commands.").with_context("failed to write output")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line.with_context("failed to read input")?;

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(PlayCommand::Quit)) => break,
            Ok(Some(command)) => run_command(&mut ctx, config, &opts, command, out)?,
            Err(message) => {
                write!(out, "{}", format_warning(&message)).with_context("failed to write output")?;
            }
        }
        prompt(out)?;
    }

    writeln!(out).with_context("failed to write output")?;
    tracing::debug!(marked = ctx.selection().count(), "play session ended");
    Ok(ctx)
}

fn run_command(
    ctx: &mut BingoContext,
    config: &GlobalConfig,
    opts: &RenderOptions,
    command: PlayCommand,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command {
        PlayCommand::Act(action) => match ctx.dispatch(action) {
            Ok(()) => draw(ctx, opts, out)?,
            Err(e) => {
                write!(out, "{}", AppError::from(e)).with_context("failed to write output")?;
            }
        },
        PlayCommand::EditEntries => {
            let editor = config.editor.as_deref();
            match edit_entries_in_editor(&ctx.state().entries_text, editor) {
                Ok(text) => {
                    ctx.dispatch(Action::SetEntries(text))?;
                    draw(ctx, opts, out)?;
                }
                Err(e) => write!(out, "{}", e).with_context("failed to write output")?,
            }
        }
        PlayCommand::Show => draw(ctx, opts, out)?,
        PlayCommand::Url => {
            let url = ctx.share_url(&config.base_url)?;
            writeln!(out, "{}", url).with_context("failed to write output")?;
        }
        PlayCommand::Copy => {
            let url = ctx.share_url(&config.base_url)?;
            copy_to_clipboard(config, url.as_str());
        }
        PlayCommand::Help => writeln!(out, "{}", HELP).with_context("failed to write output")?,
        PlayCommand::Quit => {}
    }
    Ok(())
}

fn draw(ctx: &BingoContext, opts: &RenderOptions, out: &mut impl Write) -> Result<(), AppError> {
    write!(out, "{}", render_card(ctx, opts)).with_context("failed to write output")?;
    let line = summary(ctx);
    if opts.color {
        writeln!(out, "{}", line.dimmed()).with_context("failed to write output")?;
    } else {
        writeln!(out, "{}", line).with_context("failed to write output")?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<(), AppError> {
    write!(out, "> ").with_context("failed to write output")?;
    out.flush().with_context("failed to write output")
}
