//! Tuition invoices issued to families.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Dated;
use crate::filter::Searchable;

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

labeled_enum!(InvoiceStatus {
    Paid => "paid",
    Pending => "pending",
    Overdue => "overdue",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub child_name: String,
    pub parent_name: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub issued_date: NaiveDate,
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.child_name.as_str(),
            self.parent_name.as_str(),
            self.invoice_number.as_str(),
        ]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.status.as_str())
    }
}

/// Invoices sit on the calendar by due date.
impl Dated for Invoice {
    fn date(&self) -> NaiveDate {
        self.due_date
    }
}

/// Amounts grouped by payment state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InvoiceTotals {
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
}

impl InvoiceTotals {
    pub fn from_invoices(invoices: &[&Invoice]) -> Self {
        invoices
            .iter()
            .fold(Self::default(), |mut totals, invoice| {
                match invoice.status {
                    InvoiceStatus::Paid => totals.paid += invoice.amount,
                    InvoiceStatus::Pending => totals.pending += invoice.amount,
                    InvoiceStatus::Overdue => totals.overdue += invoice.amount,
                }
                totals
            })
    }

    /// Amount still owed (pending plus overdue).
    pub fn outstanding(&self) -> f64 {
        self.pending + self.overdue
    }
}
