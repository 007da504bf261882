//! Enrolled children.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// Oldest age (in years) still counted as a toddler.
pub const TODDLER_MAX_AGE: u32 = 3;

/// Age band used as the children page's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Toddlers,
    Preschool,
}

labeled_enum!(AgeGroup {
    Toddlers => "toddlers",
    Preschool => "preschool",
});

impl AgeGroup {
    pub fn for_age(age: u32) -> Self {
        if age <= TODDLER_MAX_AGE {
            Self::Toddlers
        } else {
            Self::Preschool
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub classroom: String,
    #[serde(default)]
    pub guardians: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Percentage of scheduled days attended
    pub attendance_rate: u8,
}

impl Child {
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::for_age(self.age)
    }

    pub fn has_allergies(&self) -> bool {
        !self.allergies.is_empty()
    }
}

impl Searchable for Child {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.classroom.as_str()]
    }

    fn category(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.age_group().as_str())
    }
}
