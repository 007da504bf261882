//! Record types shown by the dashboard's list and calendar views.
//!
//! Each record declares its searchable fields and its category through
//! [`Searchable`](crate::filter::Searchable); dated records also implement
//! [`Dated`](crate::calendar::Dated).

/// Implements `as_str`, `Display` and `FromStr` for a unit enum whose
/// variants map to fixed lower-case labels.
macro_rules! labeled_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::DaycareError;

            fn from_str(value: &str) -> crate::error::Result<Self> {
                let lowered = value.trim().to_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == lowered)
                    .ok_or_else(|| {
                        let options: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        crate::error::DaycareError::InvalidInput(format!(
                            "Unknown {} \"{}\" (expected one of: {})",
                            stringify!($name),
                            value,
                            options.join(", ")
                        ))
                    })
            }
        }
    };
}

pub mod child;
pub mod event;
pub mod expense;
pub mod invoice;
pub mod notification;
pub mod teacher;

pub use child::{AgeGroup, Child};
pub use event::{Event, EventKind};
pub use expense::{Expense, ExpenseStatus};
pub use invoice::{Invoice, InvoiceStatus, InvoiceTotals};
pub use notification::{Notification, NotificationKind};
pub use teacher::{Teacher, TeacherStatus};
