//! # Daycare Core
//!
//! Core library for Daycare - roster, billing and calendar views for a
//! daycare business.
//!
//! This crate provides the record types and the filtering rules the list
//! and calendar views share, independent of any presentation layer.
//!
//! ## Architecture
//!
//! - **filter**: Free-text search plus category selection over any record
//! - **calendar**: Day and month association for dated records
//! - **model**: Expenses, invoices, children, teachers, events, notifications
//! - **seed**: Built-in mock collections and dataset loading

pub mod calendar;
pub mod error;
pub mod filter;
pub mod model;
pub mod seed;

pub use calendar::{day_indicator, events_in_month, events_on, month_agenda, Dated, MonthRef};
pub use error::{DaycareError, Result};
pub use filter::{categories, filter_records, CategoryFilter, ListFilter, Searchable};
pub use seed::Dataset;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
