//! UI primitives for the Daycare CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection and output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, status colors, calendar dots
//! - **Render**: Tables, headers, hints, error lines
//! - **Format**: String utilities (truncate, money, dates)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Column};
//! use crate::ui::render::{header, simple_table};
//!
//! let ctx = app.ui_context(&args.output)?;
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "expenses", Some("category food")));
//! println!("{}", simple_table(&ctx, &columns, &rows));
//! ```

pub mod context;
pub mod format;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;

// Re-export commonly used render functions
pub use render::{empty_state, header, hint, kv, print_error, simple_table, Column};
