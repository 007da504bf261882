pub mod billing;
pub mod calendar;
pub mod misc;
pub mod notifications;
pub mod roster;

use daycare_core::filter::ALL;
use daycare_core::ListFilter;

/// Selector options for a fixed label set: `all` followed by each label.
pub(crate) fn label_options<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(ALL)
        .chain(labels)
        .map(str::to_string)
        .collect()
}

/// Header context describing the active filter, if any.
pub(crate) fn describe_filter(filter: &ListFilter, selector: &str) -> Option<String> {
    let mut parts = Vec::new();
    if !filter.query_text().is_empty() {
        parts.push(format!("\"{}\"", filter.query_text()));
    }
    if !filter.category_filter().is_all() {
        parts.push(format!("{} {}", selector, filter.category_filter()));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_options() {
        assert_eq!(
            label_options(["paid", "pending"]),
            vec!["all".to_string(), "paid".to_string(), "pending".to_string()]
        );
    }

    #[test]
    fn test_describe_filter() {
        assert_eq!(describe_filter(&ListFilter::new(), "category"), None);
        let filter = ListFilter::new().query("Snacks").category("Food");
        assert_eq!(
            describe_filter(&filter, "category").as_deref(),
            Some("\"snacks\", category Food")
        );
    }
}
