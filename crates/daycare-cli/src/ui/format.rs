//! String formatting utilities for UI rendering.

use chrono::NaiveDate;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a money amount with a dollar sign and two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a date for display.
///
/// Pretty: "Jun 1, 2023"; plain: ISO "2023-06-01".
pub fn format_date(date: &NaiveDate, pretty: bool) -> String {
    if pretty {
        date.format("%b %-d, %Y").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Join a list for a single table cell, with a placeholder when empty.
pub fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}
