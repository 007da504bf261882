//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    /// Get the appropriate symbol based on unicode flag.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Calendar dot for one event on a day.
pub const EVENT_DOT: SymbolPair = SymbolPair::new("*", "\u{25CF}"); // ●
/// Marker shown when a day has more events than dots.
pub const MORE_DOT: SymbolPair = SymbolPair::new("+", "\u{2026}"); // …

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Warn => "[\u{26A0}]", // [⚠]
            Self::Err => "[\u{2717}]",  // [✗]
            Self::Info => "[\u{2139}]", // [ℹ]
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::ok(),
            Self::Warn => styles::warn(),
            Self::Err => styles::err(),
            Self::Info => styles::info(),
        }
    }
}

/// Named styles used across the CLI.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn ok() -> Style {
        Style::new().green()
    }

    pub fn warn() -> Style {
        Style::new().yellow()
    }

    pub fn err() -> Style {
        Style::new().red()
    }

    pub fn info() -> Style {
        Style::new().cyan()
    }
}

/// Apply a style when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Badge color for a record status or kind label.
pub fn status_badge(label: &str) -> Badge {
    match label {
        "approved" | "paid" | "active" | "activity" => Badge::Ok,
        "pending" | "training" | "reminder" | "meeting" => Badge::Warn,
        "rejected" | "overdue" | "on leave" | "alert" | "holiday" => Badge::Err,
        _ => Badge::Info,
    }
}

/// Render a status label in its badge color.
pub fn status(label: &str, color: bool) -> String {
    styled(label, status_badge(label).style(), color)
}
