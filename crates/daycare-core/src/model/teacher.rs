//! Teaching staff.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// Employment state shown on the teachers page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeacherStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "on leave")]
    OnLeave,
    #[serde(rename = "training")]
    Training,
}

labeled_enum!(TeacherStatus {
    Active => "active",
    OnLeave => "on leave",
    Training => "training",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub status: TeacherStatus,
    #[serde(default)]
    pub classrooms: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub hire_date: NaiveDate,
}

impl Searchable for Teacher {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.position.as_str()]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_records;

    fn teacher(name: &str, email: &str, position: &str, status: TeacherStatus) -> Teacher {
        Teacher {
            id: name.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            position: position.to_string(),
            status,
            classrooms: Vec::new(),
            qualifications: Vec::new(),
            hire_date: NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_on_leave_status_with_space() {
        let teachers = vec![
            teacher("Sarah", "sarah@kidscare.com", "Lead Teacher", TeacherStatus::Active),
            teacher("Jessica", "jessica@kidscare.com", "Preschool Teacher", TeacherStatus::OnLeave),
        ];
        assert_eq!(filter_records(&teachers, "", "On Leave"), vec![&teachers[1]]);
        assert_eq!("on leave".parse::<TeacherStatus>().unwrap(), TeacherStatus::OnLeave);
    }

    #[test]
    fn test_search_by_email_and_position() {
        let teachers = vec![teacher("Sarah", "sarah.j@kidscare.com", "Lead Teacher", TeacherStatus::Active)];
        assert_eq!(filter_records(&teachers, "SARAH.J@", "all").len(), 1);
        assert_eq!(filter_records(&teachers, "lead", "active").len(), 1);
        assert!(filter_records(&teachers, "lead", "training").is_empty());
    }

    #[test]
    fn test_status_serializes_with_space() {
        let value = serde_json::to_value(TeacherStatus::OnLeave).unwrap();
        assert_eq!(value, "on leave");
    }
}
