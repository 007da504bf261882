//! Input parsing helpers for the CLI.

mod parsing;

// Re-export public API
pub use parsing::{parse_date, parse_month, parse_output_format, parse_selector, OutputFormat};
