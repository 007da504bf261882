//! Built-in mock collections and dataset loading.
//!
//! The seeded collections are what every view shows when no dataset file is
//! configured. Calendar events are anchored on a reference month so the
//! calendar always has something to show for "this month".

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::MonthRef;
use crate::error::Result;
use crate::model::{
    Child, Event, EventKind, Expense, ExpenseStatus, Invoice, InvoiceStatus, Notification,
    NotificationKind, Teacher, TeacherStatus,
};

/// All record collections a presentation layer works with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub expenses: Vec<Expense>,
    pub invoices: Vec<Invoice>,
    pub children: Vec<Child>,
    pub teachers: Vec<Teacher>,
    pub events: Vec<Event>,
    pub notifications: Vec<Notification>,
}

impl Dataset {
    /// The built-in collections, with events placed around `reference`'s month.
    pub fn seeded(reference: NaiveDate) -> Self {
        Self {
            expenses: expenses(),
            invoices: invoices(),
            children: children(),
            teachers: teachers(),
            events: events(reference),
            notifications: notifications(),
        }
    }

    /// Decode a dataset from JSON; absent collections are empty.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Read and decode a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            expenses = dataset.expenses.len(),
            invoices = dataset.invoices.len(),
            children = dataset.children.len(),
            teachers = dataset.teachers.len(),
            events = dataset.events.len(),
            notifications = dataset.notifications.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}

/// Seed literal date; a bad literal is a programming error.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid calendar dates")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn expense(
    id: &str,
    on: NaiveDate,
    category: &str,
    description: &str,
    amount: f64,
    payment_method: &str,
    status: ExpenseStatus,
) -> Expense {
    Expense {
        id: id.to_string(),
        date: on,
        category: category.to_string(),
        description: description.to_string(),
        amount,
        payment_method: payment_method.to_string(),
        status,
    }
}

pub fn expenses() -> Vec<Expense> {
    use ExpenseStatus::*;
    vec![
        expense("1", date(2023, 6, 1), "Supplies", "Art supplies for Sunshine Room", 120.5, "Credit Card", Approved),
        expense("2", date(2023, 6, 3), "Food", "Snacks for the week", 85.75, "Credit Card", Approved),
        expense("3", date(2023, 6, 5), "Utilities", "Electricity bill", 210.0, "Bank Transfer", Approved),
        expense("4", date(2023, 6, 10), "Maintenance", "Plumbing repairs", 175.25, "Credit Card", Approved),
        expense("5", date(2023, 6, 15), "Supplies", "Cleaning supplies", 65.3, "Cash", Approved),
        expense("6", date(2023, 6, 20), "Equipment", "New toys for Rainbow Room", 150.0, "Credit Card", Pending),
        expense("7", date(2023, 6, 25), "Staff", "Staff training materials", 95.0, "Credit Card", Pending),
        expense("8", date(2023, 6, 28), "Miscellaneous", "Office supplies", 45.75, "Cash", Rejected),
    ]
}

fn invoice(
    id: &str,
    child_name: &str,
    parent_name: &str,
    amount: f64,
    status: InvoiceStatus,
    due_date: NaiveDate,
    issued_date: NaiveDate,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        invoice_number: format!("INV-2023-{id:0>3}"),
        child_name: child_name.to_string(),
        parent_name: parent_name.to_string(),
        amount,
        status,
        due_date,
        issued_date,
    }
}

pub fn invoices() -> Vec<Invoice> {
    use InvoiceStatus::*;
    let (may_due, may_issued) = (date(2023, 5, 15), date(2023, 5, 1));
    let (jun_due, jun_issued) = (date(2023, 6, 15), date(2023, 6, 1));
    let (apr_due, apr_issued) = (date(2023, 4, 15), date(2023, 4, 1));
    vec![
        invoice("1", "Emma Thompson", "Sarah Thompson", 450.0, Paid, may_due, may_issued),
        invoice("2", "Noah Martinez", "Maria Martinez", 450.0, Paid, may_due, may_issued),
        invoice("3", "Olivia Johnson", "Michael Johnson", 525.0, Pending, jun_due, jun_issued),
        invoice("4", "Liam Wilson", "Jennifer Wilson", 525.0, Pending, jun_due, jun_issued),
        invoice("5", "Ava Brown", "Robert Brown", 375.0, Overdue, apr_due, apr_issued),
        invoice("6", "Sophia Davis", "Emily Davis", 450.0, Paid, may_due, may_issued),
        invoice("7", "Jackson Miller", "David Miller", 525.0, Pending, jun_due, jun_issued),
        invoice("8", "Isabella Garcia", "Carlos Garcia", 375.0, Overdue, apr_due, apr_issued),
    ]
}

#[allow(clippy::too_many_arguments)]
fn child(
    id: &str,
    name: &str,
    age: u32,
    gender: &str,
    classroom: &str,
    guardians: &[&str],
    allergies: &[&str],
    attendance_rate: u8,
) -> Child {
    Child {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        classroom: classroom.to_string(),
        guardians: strings(guardians),
        allergies: strings(allergies),
        attendance_rate,
    }
}

pub fn children() -> Vec<Child> {
    vec![
        child("1", "Emma Johnson", 4, "Female", "Sunshine Room", &["Sarah Johnson", "Michael Johnson"], &["Peanuts", "Dairy"], 95),
        child("2", "Noah Williams", 3, "Male", "Rainbow Room", &["Jennifer Williams", "David Williams"], &[], 88),
        child("3", "Olivia Davis", 5, "Female", "Star Room", &["Emily Davis"], &["Eggs"], 92),
        child("4", "Liam Brown", 2, "Male", "Cloud Room", &["Jessica Brown", "Robert Brown"], &[], 85),
        child("5", "Ava Miller", 4, "Female", "Sunshine Room", &["Amanda Miller", "John Miller"], &["Gluten"], 90),
        child("6", "Ethan Wilson", 3, "Male", "Rainbow Room", &["Michelle Wilson"], &[], 94),
        child("7", "Sophia Martinez", 5, "Female", "Star Room", &["Maria Martinez", "Carlos Martinez"], &["Shellfish"], 97),
        child("8", "Mason Taylor", 2, "Male", "Cloud Room", &["Lisa Taylor", "James Taylor"], &["Peanuts"], 89),
    ]
}

#[allow(clippy::too_many_arguments)]
fn teacher(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    position: &str,
    status: TeacherStatus,
    classrooms: &[&str],
    qualifications: &[&str],
    hire_date: NaiveDate,
) -> Teacher {
    Teacher {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        position: position.to_string(),
        status,
        classrooms: strings(classrooms),
        qualifications: strings(qualifications),
        hire_date,
    }
}

pub fn teachers() -> Vec<Teacher> {
    use TeacherStatus::*;
    vec![
        teacher(
            "1",
            "Sarah Johnson",
            "sarah.j@kidscare.com",
            "(555) 123-4567",
            "Lead Teacher",
            Active,
            &["Sunshine Room", "Rainbow Room"],
            &["Early Childhood Education", "First Aid Certified", "Child Development Associate"],
            date(2020, 3, 15),
        ),
        teacher(
            "2",
            "Michael Chen",
            "michael.c@kidscare.com",
            "(555) 234-5678",
            "Assistant Teacher",
            Active,
            &["Butterfly Room"],
            &["Elementary Education", "CPR Certified"],
            date(2021, 6, 10),
        ),
        teacher(
            "3",
            "Jessica Williams",
            "jessica.w@kidscare.com",
            "(555) 345-6789",
            "Preschool Teacher",
            OnLeave,
            &["Star Room"],
            &["Child Psychology", "Montessori Certified"],
            date(2019, 9, 22),
        ),
        teacher(
            "4",
            "David Rodriguez",
            "david.r@kidscare.com",
            "(555) 456-7890",
            "Special Needs Coordinator",
            Active,
            &["Rainbow Room", "Moon Room"],
            &["Special Education", "Behavioral Therapy", "Sign Language"],
            date(2018, 11, 5),
        ),
        teacher(
            "5",
            "Emily Thompson",
            "emily.t@kidscare.com",
            "(555) 567-8901",
            "Infant Care Specialist",
            Training,
            &["Cloud Room"],
            &["Infant Development", "Nutrition"],
            date(2022, 1, 20),
        ),
    ]
}

/// Calendar events: three in `reference`'s month and one early next month.
pub fn events(reference: NaiveDate) -> Vec<Event> {
    let month = MonthRef::from_date(reference);
    let next = month.next().unwrap_or(month);
    let on = |m: MonthRef, day: u32| m.first_day().with_day(day).unwrap_or(m.first_day());
    let event = |id: &str, title: &str, date: NaiveDate, kind: EventKind, description: &str| Event {
        id: id.to_string(),
        title: title.to_string(),
        date,
        kind,
        description: Some(description.to_string()),
    };
    vec![
        event("1", "Sarah's Birthday", on(month, 15), EventKind::Birthday, "Celebration planned in Butterfly classroom"),
        event("2", "Parent-Teacher Meeting", on(month, 20), EventKind::Meeting, "Quarterly progress discussion"),
        event("3", "Field Trip", on(month, 25), EventKind::Activity, "Visit to the Children's Museum"),
        event("4", "Staff Development Day", on(next, 5), EventKind::Holiday, "Daycare closed for staff training"),
    ]
}

pub fn notifications() -> Vec<Notification> {
    use NotificationKind::*;
    let note = |id: &str, title: &str, message: &str, time: &str, kind: NotificationKind, read: bool| Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        kind,
        read,
    };
    vec![
        note("1", "New Enrollment", "Emma Johnson has been enrolled in Butterfly classroom", "10 minutes ago", Info, false),
        note("2", "Allergy Alert", "Please note that Noah Smith has peanut allergies", "1 hour ago", Alert, false),
        note("3", "Parent Meeting", "Reminder: Parent-teacher meetings scheduled for Friday", "3 hours ago", Reminder, true),
        note("4", "Staff Update", "Ms. Parker will be on leave next week", "Yesterday", Info, true),
        note("5", "Emergency Drill", "Fire drill scheduled for tomorrow at 10:00 AM", "Yesterday", Alert, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{events_in_month, events_on};
    use crate::filter::{categories, filter_records};
    use crate::model::notification::unread_count;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 3).unwrap()
    }

    #[test]
    #[should_panic(expected = "seed dates are valid calendar dates")]
    fn test_invalid_seed_date_panics() {
        date(2023, 2, 30);
    }

    #[test]
    fn test_seed_dates_are_not_epoch() {
        let epoch = NaiveDate::default();
        assert!(expenses().iter().all(|e| e.date != epoch));
        assert!(invoices()
            .iter()
            .all(|i| i.due_date != epoch && i.issued_date != epoch));
        assert!(teachers().iter().all(|t| t.hire_date != epoch));
    }

    #[test]
    fn test_seed_food_expense() {
        let expenses = expenses();
        let food = filter_records(&expenses, "", "food");
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].description, "Snacks for the week");
    }

    #[test]
    fn test_seed_expense_categories() {
        let expenses = expenses();
        assert_eq!(
            categories(&expenses),
            vec!["all", "supplies", "food", "utilities", "maintenance", "equipment", "staff", "miscellaneous"]
        );
    }

    #[test]
    fn test_seed_invoice_numbers() {
        let invoices = invoices();
        assert_eq!(invoices[0].invoice_number, "INV-2023-001");
        assert_eq!(invoices[7].invoice_number, "INV-2023-008");
        assert_eq!(filter_records(&invoices, "", "overdue").len(), 2);
    }

    #[test]
    fn test_seed_events_anchor_on_reference_month() {
        let events = events(reference());
        let december = MonthRef::from_date(reference());
        assert_eq!(events_in_month(&events, december).len(), 3);

        let staff_day = events_on(&events, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(staff_day.len(), 1);
        assert_eq!(staff_day[0].kind, EventKind::Holiday);
    }

    #[test]
    fn test_seed_notifications_unread() {
        assert_eq!(unread_count(&notifications()), 2);
    }

    #[test]
    fn test_partial_dataset_defaults_missing_collections() {
        let dataset = Dataset::from_json_str(
            r#"{"expenses":[{"id":"x","date":"2024-01-02","category":"Food","description":"Milk","amount":3.5,"paymentMethod":"Cash","status":"pending"}]}"#,
        )
        .unwrap();
        assert_eq!(dataset.expenses.len(), 1);
        assert!(dataset.invoices.is_empty());
        assert!(dataset.events.is_empty());
    }

    #[test]
    fn test_invalid_dataset_is_parse_error() {
        let err = Dataset::from_json_str("[1, 2").unwrap_err();
        assert!(matches!(err, crate::DaycareError::Parse(_)));
    }

    #[test]
    fn test_seeded_dataset_round_trips_through_json() {
        let dataset = Dataset::seeded(reference());
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(Dataset::from_json_str(&json).unwrap(), dataset);
    }
}
