//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying records
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{agenda_day_json, print_json};
pub use text::{
    child_row, event_row, expense_row, indicator_text, invoice_row, notification_row,
    print_listing, teacher_row, Listing, CHILD_COLUMNS, EVENT_COLUMNS, EXPENSE_COLUMNS,
    INVOICE_COLUMNS, NOTIFICATION_COLUMNS, TEACHER_COLUMNS,
};
