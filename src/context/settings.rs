//! Global settings for the bingo CLI.
//!
//! The settings file (`config.yml`) lives in `~/.config/bingo/` unless a
//! path is passed explicitly, and configures where share links point and how
//! cards are drawn in the terminal.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default location of the settings file, before tilde expansion.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/bingo/config.yml";

/// Configuration for copying share links to the system clipboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardConfig {
    /// Whether clipboard writes are attempted at all. Default: true.
    pub enabled: bool,

    /// Program and arguments that read the text to copy from stdin.
    /// When unset, the first available platform tool is used.
    pub command: Option<Vec<String>>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
        }
    }
}

/// Global configuration loaded from `config.yml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Page URL that share links are built on.
    pub base_url: String,

    /// Width of a terminal cell in characters, borders excluded.
    pub cell_width: usize,

    /// Height of a terminal cell in lines, borders excluded.
    pub cell_height: usize,

    /// Colorize terminal output.
    pub color: bool,

    /// Editor used by `bingo edit --editor` when none is named.
    pub editor: Option<String>,

    pub clipboard: ClipboardConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_string(),
            cell_width: 12,
            cell_height: 3,
            color: true,
            editor: None,
            clipboard: ClipboardConfig::default(),
        }
    }
}

/// Errors that can occur when loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("base_url '{url}' is not an absolute URL: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },

    #[error("clipboard command must name a program")]
    EmptyClipboardCommand,
}

impl GlobalConfig {
    /// Resolve the settings path: an explicit path wins, otherwise
    /// [`DEFAULT_CONFIG_PATH`] with `~` expanded.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref()),
        }
    }

    /// Load settings from a file path.
    ///
    /// Returns the default config if the file doesn't exist. Loaded
    /// settings are validated before being returned.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let config = match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Self::default(),
            Ok(content) => serde_yaml::from_str::<GlobalConfig>(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(SettingsError::Io(e)),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate field values that the YAML types alone cannot express.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Err(source) = url::Url::parse(&self.base_url) {
            return Err(SettingsError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source,
            });
        }
        if self.cell_width < 3 {
            return Err(SettingsError::TooSmall {
                field: "cell_width",
                min: 3,
                value: self.cell_width,
            });
        }
        if self.cell_height < 1 {
            return Err(SettingsError::TooSmall {
                field: "cell_height",
                min: 1,
                value: self.cell_height,
            });
        }
        if let Some(command) = &self.clipboard.command {
            if command.first().is_none_or(|program| program.trim().is_empty()) {
                return Err(SettingsError::EmptyClipboardCommand);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.yml");

        let config = GlobalConfig::load(&path).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000/");
        assert_eq!(config.cell_width, 12);
        assert!(config.clipboard.enabled);
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");

        std::fs::write(
            &path,
            "base_url: https://bingo.example/card\ncell_width: 16\nclipboard:\n  command: [xclip, -selection, clipboard]\n",
        )
        .unwrap();

        let config = GlobalConfig::load(&path).unwrap();
        assert_eq!(config.base_url, "https://bingo.example/card");
        assert_eq!(config.cell_width, 16);
        assert_eq!(config.cell_height, 3);
        assert_eq!(
            config.clipboard.command,
            Some(vec![
                "xclip".to_string(),
                "-selection".to_string(),
                "clipboard".to_string()
            ])
        );
    }

    #[test]
    fn test_load_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");

        std::fs::write(&path, "").unwrap();

        let config = GlobalConfig::load(&path).unwrap();
        assert!(config.color);
        assert!(config.editor.is_none());
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");

        std::fs::write(&path, "unknown_field: value\n").unwrap();

        let err = GlobalConfig::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_relative_base_url() {
        let config = GlobalConfig {
            base_url: "bingo.html".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SettingsError::InvalidBaseUrl { url, .. } if url == "bingo.html"));
    }

    #[test]
    fn test_validate_rejects_tiny_cells() {
        let config = GlobalConfig {
            cell_width: 2,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SettingsError::TooSmall { field: "cell_width", .. }));
    }

    #[test]
    fn test_validate_rejects_empty_clipboard_command() {
        let mut config = GlobalConfig::default();
        config.clipboard.command = Some(vec![]);
        assert!(matches!(
            config.validate(),
            Err(SettingsError::EmptyClipboardCommand)
        ));
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let explicit = Path::new("/tmp/bingo.yml");
        assert_eq!(GlobalConfig::resolve_path(Some(explicit)), explicit);
        assert!(GlobalConfig::resolve_path(None).ends_with(".config/bingo/config.yml"));
    }
}
