//! Operating expenses tracked on the billing page.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Dated;
use crate::filter::Searchable;

/// Approval state of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Pending,
    Approved,
    Rejected,
}

labeled_enum!(ExpenseStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

/// A single expense line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    /// Free-form category label (e.g. "Supplies", "Food")
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub payment_method: String,
    pub status: ExpenseStatus,
}

impl Searchable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.category.as_str()]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.category)
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Sum of the given expenses' amounts.
pub fn total_amount(expenses: &[&Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{events_in_month, MonthRef};
    use crate::filter::filter_records;

    fn expense(id: &str, category: &str, description: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            category: category.to_string(),
            description: description.to_string(),
            amount,
            payment_method: "Cash".to_string(),
            status: ExpenseStatus::Approved,
        }
    }

    #[test]
    fn test_food_category_selects_food_only() {
        let expenses = vec![expense("1", "Food", "Snacks", 10.0), expense("2", "Supplies", "Glue", 4.5)];
        let result = filter_records(&expenses, "", "food");
        assert_eq!(result, vec![&expenses[0]]);
    }

    #[test]
    fn test_query_searches_category_too() {
        let expenses = vec![expense("1", "Utilities", "Electricity bill", 210.0)];
        assert_eq!(filter_records(&expenses, "utilit", "all").len(), 1);
        assert_eq!(filter_records(&expenses, "ELECTRIC", "all").len(), 1);
        assert!(filter_records(&expenses, "cash", "all").is_empty());
    }

    #[test]
    fn test_total_amount() {
        let expenses = vec![expense("1", "Food", "a", 10.25), expense("2", "Food", "b", 4.75)];
        let refs: Vec<&Expense> = expenses.iter().collect();
        assert!((total_amount(&refs) - 15.0).abs() < f64::EPSILON);
        assert_eq!(total_amount(&[]), 0.0);
    }

    #[test]
    fn test_month_selection_after_filtering() {
        let mut july = expense("2", "Food", "Juice", 12.0);
        july.date = NaiveDate::from_ymd_opt(2023, 7, 2).unwrap();
        let expenses = vec![expense("1", "Food", "Snacks", 10.0), july];

        let food = filter_records(&expenses, "", "food");
        let june = events_in_month(&food, MonthRef::new(2023, 6).unwrap());
        assert_eq!(june, vec![&&expenses[0]]);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Approved".parse::<ExpenseStatus>().unwrap(), ExpenseStatus::Approved);
        assert!("lost".parse::<ExpenseStatus>().is_err());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let value = serde_json::to_value(expense("1", "Food", "Snacks", 1.0)).unwrap();
        assert_eq!(value["paymentMethod"], "Cash");
        assert_eq!(value["status"], "approved");
        assert_eq!(value["date"], "2023-06-01");
    }
}
