use daycare_core::model::notification::unread_count;
use daycare_core::model::NotificationKind;
use daycare_core::ListFilter;

use crate::app::AppContext;
use crate::cli::NotificationsArgs;
use crate::helpers::parse_selector;
use crate::output::{
    notification_row, print_json, print_listing, Listing, NOTIFICATION_COLUMNS,
};

use super::{describe_filter, label_options};

pub fn handle_notifications(ctx: &AppContext, args: &NotificationsArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(&args.output)?;
    let dataset = ctx.dataset()?;

    let options = label_options(NotificationKind::ALL.iter().map(|k| k.as_str()));
    let filter = ListFilter::new().category(parse_selector(&args.kind, &options));
    let mut notifications = filter.apply(&dataset.notifications);
    if args.unread {
        notifications.retain(|n| !n.read);
    }

    if ui.mode.is_json() {
        return print_json(&notifications);
    }

    let mut context = describe_filter(&filter, "type");
    if args.unread {
        context = Some(match context {
            Some(c) => format!("{}, unread", c),
            None => "unread".to_string(),
        });
    }
    let footer = vec![
        ("Count".to_string(), notifications.len().to_string()),
        (
            "Unread".to_string(),
            unread_count(notifications.iter().copied()).to_string(),
        ),
    ];
    print_listing(
        &ui,
        ctx.quiet(),
        &Listing {
            command: "notifications",
            context,
            noun: "notifications",
            columns: NOTIFICATION_COLUMNS,
            rows: notifications
                .iter()
                .map(|n| notification_row(&ui, n))
                .collect(),
            footer,
        },
    );
    Ok(())
}
