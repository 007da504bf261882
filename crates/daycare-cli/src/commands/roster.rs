use daycare_core::model::{AgeGroup, TeacherStatus};
use daycare_core::ListFilter;

use crate::app::AppContext;
use crate::cli::{ChildrenArgs, TeachersArgs};
use crate::helpers::parse_selector;
use crate::output::{
    child_row, print_json, print_listing, teacher_row, Listing, CHILD_COLUMNS, TEACHER_COLUMNS,
};

use super::{describe_filter, label_options};

pub fn handle_children(ctx: &AppContext, args: &ChildrenArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(&args.output)?;
    let dataset = ctx.dataset()?;

    let options = label_options(AgeGroup::ALL.iter().map(|g| g.as_str()));
    let filter = ListFilter::new()
        .query(&args.query)
        .category(parse_selector(&args.group, &options));
    let children = filter.apply(&dataset.children);

    if ui.mode.is_json() {
        return print_json(&children);
    }

    let with_allergies = children.iter().filter(|c| c.has_allergies()).count();
    let footer = vec![
        ("Count".to_string(), children.len().to_string()),
        ("With allergies".to_string(), with_allergies.to_string()),
    ];
    print_listing(
        &ui,
        ctx.quiet(),
        &Listing {
            command: "children",
            context: describe_filter(&filter, "group"),
            noun: "children",
            columns: CHILD_COLUMNS,
            rows: children.iter().map(|c| child_row(&ui, c)).collect(),
            footer,
        },
    );
    Ok(())
}

pub fn handle_teachers(ctx: &AppContext, args: &TeachersArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(&args.output)?;
    let dataset = ctx.dataset()?;

    let options = label_options(TeacherStatus::ALL.iter().map(|s| s.as_str()));
    let filter = ListFilter::new()
        .query(&args.query)
        .category(parse_selector(&args.status, &options));
    let teachers = filter.apply(&dataset.teachers);

    if ui.mode.is_json() {
        return print_json(&teachers);
    }

    print_listing(
        &ui,
        ctx.quiet(),
        &Listing {
            command: "teachers",
            context: describe_filter(&filter, "status"),
            noun: "teachers",
            columns: TEACHER_COLUMNS,
            rows: teachers.iter().map(|t| teacher_row(&ui, t)).collect(),
            footer: vec![("Count".to_string(), teachers.len().to_string())],
        },
    );
    Ok(())
}
