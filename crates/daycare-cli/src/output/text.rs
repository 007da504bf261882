//! Text and table output formatting for records.

use daycare_core::calendar::DayIndicator;
use daycare_core::model::{Child, Event, Expense, Invoice, Notification, Teacher};

use crate::ui::format::{format_date, format_money, join_or_dash, single_line, truncate};
use crate::ui::render::divider;
use crate::ui::theme::{status, status_badge, styled, EVENT_DOT, MORE_DOT};
use crate::ui::{empty_state, header, kv, simple_table, Column, UiContext};

/// Longest free-text cell shown in pretty tables.
const CELL_MAX: usize = 40;

pub const EXPENSE_COLUMNS: &[Column] = &[
    Column::new("Date"),
    Column::new("Category"),
    Column::new("Description"),
    Column::new("Amount"),
    Column::new("Method"),
    Column::new("Status"),
];

pub const INVOICE_COLUMNS: &[Column] = &[
    Column::new("Invoice"),
    Column::new("Child"),
    Column::new("Parent"),
    Column::new("Amount"),
    Column::new("Issued"),
    Column::new("Due"),
    Column::new("Status"),
];

pub const CHILD_COLUMNS: &[Column] = &[
    Column::new("Name"),
    Column::new("Age"),
    Column::new("Group"),
    Column::new("Classroom"),
    Column::new("Allergies"),
    Column::new("Attendance"),
];

pub const TEACHER_COLUMNS: &[Column] = &[
    Column::new("Name"),
    Column::new("Position"),
    Column::new("Email"),
    Column::new("Classrooms"),
    Column::new("Status"),
];

pub const EVENT_COLUMNS: &[Column] = &[
    Column::new("Date"),
    Column::new("Type"),
    Column::new("Title"),
    Column::new("Description"),
];

pub const NOTIFICATION_COLUMNS: &[Column] = &[
    Column::new("Time"),
    Column::new("Type"),
    Column::new("Title"),
    Column::new("Message"),
    Column::new("Read"),
];

/// A rendered record list with its header context and summary lines.
pub struct Listing<'a> {
    pub command: &'a str,
    pub context: Option<String>,
    pub noun: &'a str,
    pub columns: &'a [Column],
    pub rows: Vec<Vec<String>>,
    pub footer: Vec<(String, String)>,
}

/// Print a listing; quiet mode drops the header and footer.
pub fn print_listing(ctx: &UiContext, quiet: bool, listing: &Listing<'_>) {
    if !quiet {
        println!("{}", header(ctx, listing.command, listing.context.as_deref()));
    }
    if listing.rows.is_empty() {
        println!("{}", empty_state(ctx, listing.noun));
        return;
    }
    println!("{}", simple_table(ctx, listing.columns, &listing.rows));
    if !quiet && !listing.footer.is_empty() {
        if ctx.mode.is_pretty() {
            println!("{}", divider(ctx));
        }
        for (key, value) in &listing.footer {
            println!("{}", kv(ctx, key, value));
        }
    }
}

fn text_cell(ctx: &UiContext, value: &str) -> String {
    let value = single_line(value);
    if ctx.mode.is_pretty() {
        truncate(&value, CELL_MAX)
    } else {
        value
    }
}

pub fn expense_row(ctx: &UiContext, expense: &Expense) -> Vec<String> {
    let pretty = ctx.mode.is_pretty();
    vec![
        format_date(&expense.date, pretty),
        expense.category.clone(),
        text_cell(ctx, &expense.description),
        format_money(expense.amount),
        expense.payment_method.clone(),
        status(expense.status.as_str(), ctx.color),
    ]
}

pub fn invoice_row(ctx: &UiContext, invoice: &Invoice) -> Vec<String> {
    let pretty = ctx.mode.is_pretty();
    vec![
        invoice.invoice_number.clone(),
        invoice.child_name.clone(),
        invoice.parent_name.clone(),
        format_money(invoice.amount),
        format_date(&invoice.issued_date, pretty),
        format_date(&invoice.due_date, pretty),
        status(invoice.status.as_str(), ctx.color),
    ]
}

pub fn child_row(ctx: &UiContext, child: &Child) -> Vec<String> {
    vec![
        child.name.clone(),
        child.age.to_string(),
        child.age_group().to_string(),
        child.classroom.clone(),
        text_cell(ctx, &join_or_dash(&child.allergies)),
        format!("{}%", child.attendance_rate),
    ]
}

pub fn teacher_row(ctx: &UiContext, teacher: &Teacher) -> Vec<String> {
    vec![
        teacher.name.clone(),
        teacher.position.clone(),
        teacher.email.clone(),
        text_cell(ctx, &join_or_dash(&teacher.classrooms)),
        status(teacher.status.as_str(), ctx.color),
    ]
}

pub fn event_row(ctx: &UiContext, event: &Event) -> Vec<String> {
    vec![
        format_date(&event.date, ctx.mode.is_pretty()),
        status(event.kind.as_str(), ctx.color),
        event.title.clone(),
        text_cell(ctx, event.description.as_deref().unwrap_or("-")),
    ]
}

pub fn notification_row(ctx: &UiContext, notification: &Notification) -> Vec<String> {
    vec![
        notification.time.clone(),
        status(notification.kind.as_str(), ctx.color),
        notification.title.clone(),
        text_cell(ctx, &notification.message),
        if notification.read { "yes" } else { "no" }.to_string(),
    ]
}

/// Render a calendar cell marker: one dot per shown event plus an overflow
/// marker.
pub fn indicator_text(ctx: &UiContext, indicator: &DayIndicator<'_, Event>) -> String {
    let mut out: String = indicator
        .shown
        .iter()
        .map(|e| {
            let style = status_badge(e.kind.as_str()).style();
            styled(EVENT_DOT.get(ctx.unicode), style, ctx.color)
        })
        .collect();
    if indicator.overflow {
        out.push_str(MORE_DOT.get(ctx.unicode));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daycare_core::day_indicator;
    use daycare_core::model::{EventKind, ExpenseStatus};
    use crate::ui::context::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    #[test]
    fn test_expense_row_plain() {
        let expense = Expense {
            id: "2".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 6, 3).unwrap(),
            category: "Food".to_string(),
            description: "Snacks for the week".to_string(),
            amount: 85.75,
            payment_method: "Credit Card".to_string(),
            status: ExpenseStatus::Approved,
        };
        assert_eq!(
            expense_row(&plain_ctx(), &expense),
            vec!["2023-06-03", "Food", "Snacks for the week", "$85.75", "Credit Card", "approved"]
        );
    }

    #[test]
    fn test_indicator_text_ascii() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let events: Vec<Event> = (0..5)
            .map(|i| Event {
                id: i.to_string(),
                title: format!("E{i}"),
                date: day,
                kind: EventKind::Meeting,
                description: None,
            })
            .collect();
        let indicator = day_indicator(&events, day).unwrap();
        assert_eq!(indicator_text(&plain_ctx(), &indicator), "***+");
    }
}
