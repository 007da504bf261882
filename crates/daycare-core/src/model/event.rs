//! Calendar events (birthdays, activities, closures, meetings).

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Dated;
use crate::filter::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Birthday,
    Activity,
    Holiday,
    Meeting,
}

labeled_enum!(EventKind {
    Birthday => "birthday",
    Activity => "activity",
    Holiday => "holiday",
    Meeting => "meeting",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Dated for Event {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind.as_str())
    }
}
