use chrono::NaiveDate;
use daycare_core::model::{Child, Expense, Invoice, Teacher};
use daycare_core::seed;
use daycare_core::{events_in_month, events_on, filter_records, CategoryFilter, ListFilter, MonthRef};

const QUERIES: &[&str] = &["", "a", "room", "SUPPLIES", "inv-2023-00", "zzz"];

fn owned<T: Clone>(refs: Vec<&T>) -> Vec<T> {
    refs.into_iter().cloned().collect()
}

fn check_properties<T>(records: &[T], categories: &[&str])
where
    T: daycare_core::Searchable + Clone + PartialEq + std::fmt::Debug,
{
    let everything: Vec<&T> = records.iter().collect();
    assert_eq!(filter_records(records, "", "all"), everything);

    for query in QUERIES {
        let unconstrained = ListFilter::new().query(query).apply(records);
        assert_eq!(filter_records(records, query, "all"), unconstrained);

        assert_eq!(
            filter_records(records, &query.to_uppercase(), "all"),
            filter_records(records, &query.to_lowercase(), "all"),
        );

        for category in categories {
            let once = owned(filter_records(records, query, category));
            let twice = owned(filter_records(&once, query, category));
            assert_eq!(once, twice, "idempotence for {query:?}/{category:?}");

            // Every hit must also be a hit without the category constraint.
            let unconstrained = owned(filter_records(records, query, "all"));
            assert!(once.iter().all(|r| unconstrained.contains(r)));
        }
    }
}

#[test]
fn expense_filter_properties() {
    let expenses: Vec<Expense> = seed::expenses();
    check_properties(&expenses, &["all", "food", "Supplies", "STAFF", "travel"]);
}

#[test]
fn invoice_filter_properties() {
    let invoices: Vec<Invoice> = seed::invoices();
    check_properties(&invoices, &["all", "paid", "Pending", "OVERDUE"]);
}

#[test]
fn child_filter_properties() {
    let children: Vec<Child> = seed::children();
    check_properties(&children, &["all", "toddlers", "Preschool"]);
}

#[test]
fn teacher_filter_properties() {
    let teachers: Vec<Teacher> = seed::teachers();
    check_properties(&teachers, &["all", "active", "on leave", "Training"]);
}

#[test]
fn category_sentinel_matches_no_constraint() {
    let expenses = seed::expenses();
    let with_sentinel = ListFilter::new().category(CategoryFilter::All).apply(&expenses);
    let without = ListFilter::new().apply(&expenses);
    assert_eq!(with_sentinel, without);
}

#[test]
fn calendar_example() {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let events = seed::events(reference);
    let june_15 = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let june_16 = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();

    let on_15 = events_on(&events, june_15);
    assert_eq!(on_15.len(), 1);
    assert_eq!(on_15[0].title, "Sarah's Birthday");
    assert!(events_on(&events, june_16).is_empty());

    let june = MonthRef::from_date(reference);
    let titles: Vec<_> = events_in_month(&events, june)
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Sarah's Birthday", "Parent-Teacher Meeting", "Field Trip"]);
    assert_eq!(events_in_month(&events, june.next().unwrap()).len(), 1);
}
