//! Terminal detection and per-command rendering settings.
//!
//! [`Terminal`] is detected once per process. Each command then combines it
//! with the merged `--no-color`/`--ascii`/`[ui]` preferences and its own
//! `--json`/`--format` flags into a [`UiContext`].

use std::io::IsTerminal;

use crate::helpers::OutputFormat;

/// Columns assumed when the terminal does not report a width.
const FALLBACK_WIDTH: usize = 80;

/// How a command renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Json,
    /// Stable, tab-separated output for pipes and scripts
    #[default]
    Plain,
    /// Aligned tables with color
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// What the process is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|v| v == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: columns_from_env().or_else(stdout_columns),
        }
    }
}

/// Display preferences after merging flags with the `[ui]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPrefs {
    pub color: bool,
    pub ascii: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            color: true,
            ascii: false,
        }
    }
}

/// Resolved rendering settings for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// `--json` wins outright. Tables need a real terminal; `--format plain`,
    /// `TERM=dumb` or a pipe all give plain output.
    pub fn resolve(
        term: &Terminal,
        prefs: UiPrefs,
        json: bool,
        format: Option<OutputFormat>,
    ) -> Self {
        let mode = if json {
            OutputMode::Json
        } else if format == Some(OutputFormat::Plain) || term.dumb || !term.stdout_tty {
            OutputMode::Plain
        } else {
            OutputMode::Pretty
        };

        Self {
            color: prefs.color && term.stdout_tty && !term.dumb && !term.no_color,
            unicode: !prefs.ascii,
            width: term.columns.unwrap_or(FALLBACK_WIDTH),
            mode,
        }
    }

    /// Settings for error lines, which ignore the command's output flags.
    pub fn for_errors(term: &Terminal, prefs: UiPrefs) -> Self {
        Self::resolve(term, prefs, false, None)
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
}

#[cfg(unix)]
fn stdout_columns() -> Option<usize> {
    // SAFETY: an all-zero winsize is valid, and TIOCGWINSZ only fills it in.
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
    (rc == 0 && size.ws_col > 0).then_some(usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn stdout_columns() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            dumb: false,
            no_color: false,
            columns: Some(120),
        }
    }

    fn pipe() -> Terminal {
        Terminal {
            stdout_tty: false,
            columns: None,
            ..tty()
        }
    }

    #[test]
    fn test_json_wins_over_format() {
        let ctx = UiContext::resolve(&tty(), UiPrefs::default(), true, Some(OutputFormat::Plain));
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_tty_renders_tables() {
        let ctx = UiContext::resolve(&tty(), UiPrefs::default(), false, Some(OutputFormat::Table));
        assert_eq!(ctx.mode, OutputMode::Pretty);
        assert!(ctx.color);
        assert_eq!(ctx.width, 120);
    }

    #[test]
    fn test_plain_format_on_tty() {
        let ctx = UiContext::resolve(&tty(), UiPrefs::default(), false, Some(OutputFormat::Plain));
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_pipe_is_plain_without_color() {
        let ctx = UiContext::resolve(&pipe(), UiPrefs::default(), false, Some(OutputFormat::Table));
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(!ctx.color);
        assert_eq!(ctx.width, FALLBACK_WIDTH);
    }

    #[test]
    fn test_dumb_terminal() {
        let term = Terminal { dumb: true, ..tty() };
        let ctx = UiContext::resolve(&term, UiPrefs::default(), false, None);
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(!ctx.color);
    }

    #[test]
    fn test_prefs_from_config() {
        let prefs = UiPrefs {
            color: false,
            ascii: true,
        };
        let ctx = UiContext::resolve(&tty(), prefs, false, None);
        assert!(!ctx.color);
        assert!(!ctx.unicode);

        let term = Terminal { no_color: true, ..tty() };
        assert!(!UiContext::for_errors(&term, UiPrefs::default()).color);
    }
}
