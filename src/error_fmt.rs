use std::fmt;
use std::io;

use owo_colors::OwoColorize;

use crate::context::{ActionError, EncodeError, SettingsError, ShareUrlError};
use crate::EditorError;

/// Application error with context for actionable error messages.
#[derive(Debug)]
pub enum AppError {
    /// IO error with context
    Io { context: String, source: io::Error },
    /// Settings file could not be loaded
    Settings { path: String, source: SettingsError },
    /// Share link could not be built
    ShareUrl(ShareUrlError),
    /// A play action was rejected
    Action(ActionError),
    /// HTML export failed
    Export(minijinja::Error),
    /// Editor resolution error
    Editor(EditorError),
    /// Editor exited unsuccessfully
    EditorFailed { editor: String, temp_path: String },
    /// No changes provided to edit command
    NoChangesProvided,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io { context, source } => {
                write!(f, "{}", format_cli_error(&format!("{}: {}", context, source)))
            }
            AppError::Settings { path, source } => {
                write!(f, "{}", format_settings_error(path, source))
            }
            AppError::ShareUrl(source) => write!(f, "{}", format_share_url_error(source)),
            AppError::Action(source) => write!(f, "{}", format_action_error(source)),
            AppError::Export(source) => {
                write!(f, "{}", format_cli_error(&format!("failed to render HTML: {}", source)))
            }
            AppError::Editor(source) => write!(f, "{}", format_editor_error(source)),
            AppError::EditorFailed { editor, temp_path } => {
                write!(f, "{}", format_editor_failed(editor, temp_path))
            }
            AppError::NoChangesProvided => write!(f, "{}", format_no_changes_provided()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ShareUrlError> for AppError {
    fn from(e: ShareUrlError) -> Self {
        AppError::ShareUrl(e)
    }
}

impl From<EncodeError> for AppError {
    fn from(e: EncodeError) -> Self {
        AppError::ShareUrl(ShareUrlError::Encode(e))
    }
}

impl From<ActionError> for AppError {
    fn from(e: ActionError) -> Self {
        AppError::Action(e)
    }
}

impl From<minijinja::Error> for AppError {
    fn from(e: minijinja::Error) -> Self {
        AppError::Export(e)
    }
}

impl From<EditorError> for AppError {
    fn from(e: EditorError) -> Self {
        AppError::Editor(e)
    }
}

/// Extension trait to add context to IO results.
pub trait IoResultExt<T> {
    fn with_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn with_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Io {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add the settings path to settings results.
pub trait SettingsResultExt<T> {
    fn with_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> SettingsResultExt<T> for Result<T, SettingsError> {
    fn with_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Settings {
            path: path.to_string(),
            source: e,
        })
    }
}

/// One-line notice for problems that do not stop the command.
pub fn format_warning(message: &str) -> String {
    format!("{}: {}\n", "warning".yellow().bold(), message)
}

// ============================================================================
// Formatting functions (internal implementation)
// ============================================================================

fn format_cli_error(message: &str) -> String {
    format!("{}: {}\n", "error".red().bold(), message)
}

fn format_settings_error(path: &str, error: &SettingsError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("failed to load {}\n", path.cyan()));
    out.push_str(&format!("  {} {}\n", "•".red(), error));

    match error {
        SettingsError::Parse(_) => {
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str("    1. Check the YAML syntax of the settings file\n");
            out.push_str(&format!(
                "    2. Known keys: {}\n",
                "base_url, cell_width, cell_height, color, editor, clipboard".cyan()
            ));
        }
        SettingsError::InvalidBaseUrl { .. } => {
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    Use an absolute URL, for example {}\n",
                "base_url: https://example.com/bingo/".cyan()
            ));
        }
        _ => {}
    }

    out
}

fn format_share_url_error(error: &ShareUrlError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str("could not build the share link\n");
    out.push_str(&format!("  {} {}\n", "•".red(), error));

    if let ShareUrlError::BaseUrl { .. } = error {
        out.push('\n');
        out.push_str(&format!("  {}:\n", "To fix this".bold()));
        out.push_str(&format!(
            "    Set an absolute {} in the settings file\n",
            "base_url".cyan()
        ));
    }

    out
}

fn format_action_error(error: &ActionError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    match error {
        ActionError::OutOfBounds { coord, size } => {
            out.push_str(&format!("no cell at {}\n", coord.to_string().yellow()));
            out.push('\n');
            out.push_str(&format!(
                "  {}\n",
                format!(
                    "The card is {}x{}; columns and rows run from 0 to {}.",
                    size,
                    size,
                    size.saturating_sub(1)
                )
                .dimmed()
            ));
        }
    }

    out
}

fn format_editor_error(error: &EditorError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));

    match error {
        EditorError::NotFound(msg) => {
            out.push_str(&format!("{}\n", msg));
            out.push('\n');
            out.push_str(&format!("  {}\n", "No text editor could be resolved.".dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    1. Set the {} environment variable: {}\n",
                "$EDITOR".cyan(),
                "export EDITOR=vim".cyan()
            ));
            out.push_str("    2. Pass an editor explicitly via command-line argument\n");
            out.push_str(&format!(
                "    3. Set {} in the settings file\n",
                "editor".cyan()
            ));
        }
    }

    out
}

fn format_editor_failed(editor: &str, temp_path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("editor '{}' exited with an error\n", editor.yellow()));
    out.push('\n');
    out.push_str(&format!(
        "  {}\n",
        format!("Your entries were left in {}", temp_path).dimmed()
    ));

    out
}

fn format_no_changes_provided() -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str("no changes provided\n");
    out.push('\n');
    out.push_str(&format!("  {}\n", "The edit command requires at least one change.".dimmed()));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str(&format!(
        "    1. Provide field flags: {}\n",
        "bingo edit <link> --title \"New title\"".cyan()
    ));
    out.push_str(&format!(
        "    2. Use editor mode: {}\n",
        "bingo edit <link> --editor".cyan()
    ));
    out.push_str(&format!(
        "    3. Replace the entries: {}\n",
        "bingo edit <link> --entries-file entries.txt".cyan()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Coord;

    fn strip_ansi(s: &str) -> String {
        let re = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn test_format_out_of_bounds() {
        let err = AppError::Action(ActionError::OutOfBounds {
            coord: Coord::new(7, 1),
            size: 5,
        });
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("error:"));
        assert!(stripped.contains("no cell at 7,1"));
        assert!(stripped.contains("from 0 to 4"));
    }

    #[test]
    fn test_format_invalid_base_url() {
        let source = url::Url::parse("nope").unwrap_err();
        let err = AppError::ShareUrl(ShareUrlError::BaseUrl {
            base: "nope".to_string(),
            source,
        });
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("could not build the share link"));
        assert!(stripped.contains("'nope'"));
        assert!(stripped.contains("To fix this"));
        assert!(stripped.contains("base_url"));
    }

    #[test]
    fn test_format_settings_error() {
        let err = AppError::Settings {
            path: "/home/me/.config/bingo/config.yml".to_string(),
            source: SettingsError::EmptyClipboardCommand,
        };
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("failed to load /home/me/.config/bingo/config.yml"));
        assert!(stripped.contains("clipboard command must name a program"));
        assert!(!stripped.contains("To fix this"));
    }

    #[test]
    fn test_format_no_changes_provided() {
        let stripped = strip_ansi(&AppError::NoChangesProvided.to_string());
        assert!(stripped.contains("no changes provided"));
        assert!(stripped.contains("bingo edit <link> --editor"));
    }

    #[test]
    fn test_format_io_error_with_context() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result.with_context("failed to read entries.txt").unwrap_err();
        let stripped = strip_ansi(&err.to_string());
        assert_eq!(stripped, "error: failed to read entries.txt: missing\n");
    }

    #[test]
    fn test_format_warning() {
        let stripped = strip_ansi(&format_warning("clipboard unavailable"));
        assert_eq!(stripped, "warning: clipboard unavailable\n");
    }
}
