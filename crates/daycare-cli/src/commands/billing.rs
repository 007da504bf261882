use daycare_core::model::expense::total_amount;
use daycare_core::model::{InvoiceStatus, InvoiceTotals};
use daycare_core::{categories, events_in_month, Dated, ListFilter};

use crate::app::AppContext;
use crate::cli::{CategoriesArgs, ExpensesArgs, InvoicesArgs};
use crate::helpers::{parse_month, parse_selector};
use crate::output::{
    expense_row, invoice_row, print_json, print_listing, Listing, EXPENSE_COLUMNS,
    INVOICE_COLUMNS,
};
use crate::ui::format::format_money;

use super::{describe_filter, label_options};

pub fn handle_expenses(ctx: &AppContext, args: &ExpensesArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(&args.output)?;
    let dataset = ctx.dataset()?;

    let options = categories(&dataset.expenses);
    let filter = ListFilter::new()
        .query(&args.query)
        .category(parse_selector(&args.category, &options));
    let expenses = within_month(filter.apply(&dataset.expenses), args.month.as_deref())?;

    if ui.mode.is_json() {
        return print_json(&expenses);
    }

    let footer = vec![
        ("Count".to_string(), expenses.len().to_string()),
        ("Total".to_string(), format_money(total_amount(&expenses))),
    ];
    print_listing(
        &ui,
        ctx.quiet(),
        &Listing {
            command: "expenses",
            context: with_month(describe_filter(&filter, "category"), args.month.as_deref()),
            noun: "expenses",
            columns: EXPENSE_COLUMNS,
            rows: expenses.iter().map(|e| expense_row(&ui, e)).collect(),
            footer,
        },
    );
    Ok(())
}

pub fn handle_categories(ctx: &AppContext, args: &CategoriesArgs) -> anyhow::Result<()> {
    let dataset = ctx.dataset()?;
    let options = categories(&dataset.expenses);
    if args.json {
        return print_json(&options);
    }
    for option in options {
        println!("{}", option);
    }
    Ok(())
}

pub fn handle_invoices(ctx: &AppContext, args: &InvoicesArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(&args.output)?;
    let dataset = ctx.dataset()?;

    let options = label_options(InvoiceStatus::ALL.iter().map(|s| s.as_str()));
    let filter = ListFilter::new()
        .query(&args.query)
        .category(parse_selector(&args.status, &options));
    let invoices = within_month(filter.apply(&dataset.invoices), args.due_month.as_deref())?;

    if ui.mode.is_json() {
        return print_json(&invoices);
    }

    let totals = InvoiceTotals::from_invoices(&invoices);
    let footer = vec![
        ("Count".to_string(), invoices.len().to_string()),
        ("Paid".to_string(), format_money(totals.paid)),
        ("Pending".to_string(), format_money(totals.pending)),
        ("Overdue".to_string(), format_money(totals.overdue)),
        ("Outstanding".to_string(), format_money(totals.outstanding())),
    ];
    print_listing(
        &ui,
        ctx.quiet(),
        &Listing {
            command: "invoices",
            context: with_month(describe_filter(&filter, "status"), args.due_month.as_deref()),
            noun: "invoices",
            columns: INVOICE_COLUMNS,
            rows: invoices.iter().map(|i| invoice_row(&ui, i)).collect(),
            footer,
        },
    );
    Ok(())
}

/// Narrow already-filtered records to one month of their calendar date.
fn within_month<'a, T: Dated>(
    records: Vec<&'a T>,
    month: Option<&str>,
) -> anyhow::Result<Vec<&'a T>> {
    let Some(value) = month else {
        return Ok(records);
    };
    let month = parse_month(value)?;
    let narrowed: Vec<&'a T> = events_in_month(&records, month).into_iter().copied().collect();
    Ok(narrowed)
}

fn with_month(context: Option<String>, month: Option<&str>) -> Option<String> {
    match (context, month) {
        (Some(c), Some(m)) => Some(format!("{}, {}", c, m.trim())),
        (None, Some(m)) => Some(m.trim().to_string()),
        (context, None) => context,
    }
}
