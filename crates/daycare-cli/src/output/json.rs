//! JSON output formatting for records.

use chrono::NaiveDate;
use serde::Serialize;

use daycare_core::calendar::DayIndicator;
use daycare_core::model::Event;

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Calendar cell marker as JSON.
fn indicator_json(indicator: Option<&DayIndicator<'_, Event>>) -> serde_json::Value {
    match indicator {
        Some(ind) => serde_json::json!({
            "kinds": ind.shown.iter().map(|e| e.kind.as_str()).collect::<Vec<_>>(),
            "overflow": ind.overflow,
        }),
        None => serde_json::Value::Null,
    }
}

/// One agenda day as JSON: the date, its cell indicator, and its events.
pub fn agenda_day_json(
    date: NaiveDate,
    indicator: Option<&DayIndicator<'_, Event>>,
    events: &[&Event],
) -> serde_json::Value {
    serde_json::json!({
        "date": date,
        "indicator": indicator_json(indicator),
        "events": events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycare_core::day_indicator;
    use daycare_core::model::EventKind;

    #[test]
    fn test_agenda_day_json() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let events: Vec<Event> = (0..4)
            .map(|i| Event {
                id: i.to_string(),
                title: format!("Event {i}"),
                date,
                kind: EventKind::Activity,
                description: None,
            })
            .collect();
        let refs: Vec<&Event> = events.iter().collect();
        let indicator = day_indicator(&events, date);
        let value = agenda_day_json(date, indicator.as_ref(), &refs);
        assert_eq!(value["date"], "2024-06-15");
        assert_eq!(value["indicator"]["kinds"].as_array().unwrap().len(), 3);
        assert_eq!(value["indicator"]["overflow"], true);
        assert_eq!(value["events"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_missing_indicator_is_null() {
        assert!(indicator_json(None).is_null());
    }
}
