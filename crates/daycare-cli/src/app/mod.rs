//! Application-level utilities for the Daycare CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and dataset files

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
