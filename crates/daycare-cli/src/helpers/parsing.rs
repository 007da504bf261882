//! Parsing helpers for dates, months, selectors, and output format.

use chrono::NaiveDate;
use daycare_core::{CategoryFilter, MonthRef};

use crate::errors::CliError;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value)).into()
    })
}

/// Parse a `YYYY-MM` month.
pub fn parse_month(value: &str) -> anyhow::Result<MonthRef> {
    MonthRef::parse(value).map_err(|e| CliError::invalid_input(e.to_string()).into())
}

/// Parse a category selector, warning when it names no known option.
///
/// Unknown values are not an error: they simply match nothing.
pub fn parse_selector(value: &str, options: &[String]) -> CategoryFilter {
    let filter = CategoryFilter::parse(value);
    if let CategoryFilter::Only(wanted) = &filter {
        let wanted = wanted.to_lowercase();
        if !options.iter().any(|o| o.to_lowercase() == wanted) {
            tracing::warn!(
                selector = %value,
                known = %options.join(", "),
                "selector matches no known option"
            );
        }
    }
    filter
}

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert!(parse_date("15/06/2024").is_err());
    }

    #[test]
    fn test_parse_month() {
        let month = parse_month("2024-06").unwrap();
        assert_eq!((month.year(), month.month()), (2024, 6));
        let err = parse_month("2024-6-1").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_parse_selector() {
        let options = vec!["all".to_string(), "food".to_string()];
        assert_eq!(parse_selector("ALL", &options), CategoryFilter::All);
        assert_eq!(
            parse_selector("Food", &options),
            CategoryFilter::Only("Food".to_string())
        );
        assert_eq!(
            parse_selector("travel", &options),
            CategoryFilter::Only("travel".to_string())
        );
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("table")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }
}
