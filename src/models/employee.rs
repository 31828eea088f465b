use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

use super::entry::DayEntry;

/// An employee row on the shift calendar.
///
/// `supervisor_display_name` links the employee to the supervisor user whose
/// `display_name` equals it; empty means unlinked. The linkage is by display
/// name, not by a stable id, so renaming a supervisor re-links or un-links
/// their employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    #[serde(default)]
    pub area: String,
    /// Unique business key across all employees.
    pub tech_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, rename = "supervisor")]
    pub supervisor_display_name: String,
    /// Only non-default entries are stored; absence means `Working`.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub calendar: BTreeMap<NaiveDate, DayEntry>,
}

impl Employee {
    pub fn entry_for(&self, date: NaiveDate) -> DayEntry {
        self.calendar
            .get(&date)
            .cloned()
            .unwrap_or(DayEntry::Working)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
