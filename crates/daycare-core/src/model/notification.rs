//! Dashboard notifications.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Alert,
    Reminder,
}

labeled_enum!(NotificationKind {
    Info => "info",
    Alert => "alert",
    Reminder => "reminder",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Relative time label as displayed ("10 minutes ago")
    pub time: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
}

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str()]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind.as_str())
    }
}

/// Unread items among `notifications`, which may be a filtered view.
pub fn unread_count<'a>(notifications: impl IntoIterator<Item = &'a Notification>) -> usize {
    notifications.into_iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_records;

    fn note(title: &str, kind: NotificationKind, read: bool) -> Notification {
        Notification {
            id: title.to_string(),
            title: title.to_string(),
            message: String::new(),
            time: "Yesterday".to_string(),
            kind,
            read,
        }
    }

    #[test]
    fn test_kind_filter_and_unread() {
        let notes = vec![
            note("Allergy Alert", NotificationKind::Alert, false),
            note("Staff Update", NotificationKind::Info, true),
            note("Emergency Drill", NotificationKind::Alert, true),
        ];
        let alerts = filter_records(&notes, "", "alert");
        assert_eq!(alerts.len(), 2);
        assert_eq!(unread_count(&notes), 1);
        assert_eq!(unread_count(alerts.iter().copied()), 1);

        let info = filter_records(&notes, "", "info");
        assert_eq!(unread_count(info.iter().copied()), 0);
    }
}
