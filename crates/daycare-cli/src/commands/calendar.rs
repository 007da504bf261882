use chrono::NaiveDate;

use daycare_core::model::Event;
use daycare_core::{day_indicator, events_on, month_agenda, MonthRef};

use crate::app::AppContext;
use crate::cli::EventsArgs;
use crate::helpers::{parse_date, parse_month};
use crate::output::{
    agenda_day_json, event_row, indicator_text, print_json, print_listing, Listing,
    EVENT_COLUMNS,
};
use crate::ui::format::format_date;
use crate::ui::{hint, UiContext};

pub fn handle_events(ctx: &AppContext, args: &EventsArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(&args.output)?;
    let dataset = ctx.dataset()?;

    if let Some(ref on) = args.on {
        let date = parse_date(on)?;
        return print_day(ctx, &ui, &dataset.events, date);
    }

    let month = match args.month.as_deref() {
        Some(value) => parse_month(value)?,
        None => MonthRef::from_date(ctx.today()),
    };
    print_month(ctx, &ui, &dataset.events, month)
}

fn print_day(
    ctx: &AppContext,
    ui: &UiContext,
    events: &[Event],
    date: NaiveDate,
) -> anyhow::Result<()> {
    let on_day = events_on(events, date);
    let indicator = day_indicator(events, date);

    if ui.mode.is_json() {
        return print_json(&agenda_day_json(date, indicator.as_ref(), &on_day));
    }

    let mut footer = vec![("Count".to_string(), on_day.len().to_string())];
    if let Some(ref indicator) = indicator {
        footer.push(("Marks".to_string(), indicator_text(ui, indicator)));
    }
    print_listing(
        ui,
        ctx.quiet(),
        &Listing {
            command: "events",
            context: Some(format_date(&date, ui.mode.is_pretty())),
            noun: "events",
            columns: EVENT_COLUMNS,
            rows: on_day.iter().map(|e| event_row(ui, e)).collect(),
            footer,
        },
    );
    Ok(())
}

fn print_month(
    ctx: &AppContext,
    ui: &UiContext,
    events: &[Event],
    month: MonthRef,
) -> anyhow::Result<()> {
    let agenda = month_agenda(events, month);

    if ui.mode.is_json() {
        let days: Vec<serde_json::Value> = agenda
            .iter()
            .map(|(day, on_day)| {
                agenda_day_json(*day, day_indicator(events, *day).as_ref(), on_day)
            })
            .collect();
        return print_json(&serde_json::json!({
            "month": month.to_string(),
            "days": days,
        }));
    }

    let pretty = ui.mode.is_pretty();
    let rows: Vec<Vec<String>> = agenda
        .iter()
        .flat_map(|(_, on_day)| on_day.iter().map(move |e| event_row(ui, e)))
        .collect();
    let mut footer = vec![
        ("Days".to_string(), agenda.len().to_string()),
        ("Events".to_string(), rows.len().to_string()),
    ];
    for (day, _) in &agenda {
        if let Some(indicator) = day_indicator(events, *day) {
            footer.push((format_date(day, pretty), indicator_text(ui, &indicator)));
        }
    }

    print_listing(
        ui,
        ctx.quiet(),
        &Listing {
            command: "events",
            context: Some(month.to_string()),
            noun: "events",
            columns: EVENT_COLUMNS,
            rows,
            footer,
        },
    );

    if pretty && !ctx.quiet() {
        let mut nav = Vec::new();
        if let Some(previous) = month.previous() {
            nav.push(format!("--month {}", previous));
        }
        if let Some(next) = month.next() {
            nav.push(format!("--month {}", next));
        }
        if !nav.is_empty() {
            println!("{}", hint(ui, &nav.join(" | ")));
        }
    }
    Ok(())
}
