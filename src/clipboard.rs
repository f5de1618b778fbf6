//! System clipboard access through external clipboard programs.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::context::ClipboardConfig;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is disabled in settings")]
    Disabled,
    #[error("no clipboard program found (tried {0})")]
    NoCommand(String),
    #[error("failed to run clipboard program '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("clipboard program '{program}' failed: {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Platform clipboard programs, in the order they are tried.
fn platform_candidates() -> Vec<Vec<&'static str>> {
    if cfg!(target_os = "macos") {
        vec![vec!["pbcopy"]]
    } else if cfg!(windows) {
        vec![vec!["clip"]]
    } else {
        let mut candidates = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            candidates.push(vec!["wl-copy"]);
        }
        candidates.push(vec!["xclip", "-selection", "clipboard"]);
        candidates.push(vec!["xsel", "--clipboard", "--input"]);
        candidates
    }
}

/// Copy `text` to the clipboard.
///
/// Runs the configured command, or else the first platform program that can
/// be started, and writes `text` to its stdin. Returns once that program
/// exits, even if it leaves a background process serving the selection.
pub fn copy(config: &ClipboardConfig, text: &str) -> Result<(), ClipboardError> {
    if !config.enabled {
        return Err(ClipboardError::Disabled);
    }

    if let Some(command) = &config.command {
        return run(command, text);
    }

    let candidates = platform_candidates();
    for candidate in &candidates {
        match run(candidate, text) {
            Err(ClipboardError::Spawn { program, source })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(%program, "clipboard program not installed");
            }
            result => return result,
        }
    }

    let tried: Vec<&str> = candidates.iter().filter_map(|c| c.first().copied()).collect();
    Err(ClipboardError::NoCommand(tried.join(", ")))
}

fn run(argv: &[impl AsRef<str>], text: &str) -> Result<(), ClipboardError> {
    let Some((program, args)) = argv.split_first() else {
        return Err(ClipboardError::NoCommand(String::new()));
    };
    let program = program.as_ref().to_string();
    let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();

    let mut child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::piped())
        // Programs like xclip fork a daemon that keeps these open.
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn {
            program: program.clone(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(text.as_bytes()) {
            // The exit status below says whether the program failed.
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Err(source) => {
                return Err(ClipboardError::Spawn {
                    program: program.clone(),
                    source,
                });
            }
            Ok(()) => {}
        }
    }

    let status = child.wait().map_err(|source| ClipboardError::Spawn {
        program: program.clone(),
        source,
    })?;

    if !status.success() {
        return Err(ClipboardError::Failed { program, status });
    }

    tracing::debug!(%program, bytes = text.len(), "copied to clipboard");
    Ok(())
}
