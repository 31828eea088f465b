//! Flat tabular projection of the directory + calendar for export.
//!
//! The cell text must be byte-identical to what the interactive calendar
//! shows, so both go through `DayEntry::label`. Turning the table into an
//! actual spreadsheet file is the consumer's concern.

use serde::Serialize;
use utoipa::ToSchema;

use crate::calendar::Window;
use crate::models::Employee;

const PROFILE_COLUMNS: [&str; 6] = ["Area", "Tech #", "First", "Last", "Supervisor", "Status"];

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExportTable {
    /// Profile column titles followed by one month-day label per date.
    pub header: Vec<String>,
    /// Blank under the profile columns, weekday names under the dates.
    pub subheader: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn project(employees: &[Employee], window: &Window) -> ExportTable {
    let mut header: Vec<String> = PROFILE_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut subheader = vec![String::new(); PROFILE_COLUMNS.len()];

    for date in &window.dates {
        header.push(date.format("%b %-d").to_string());
        subheader.push(date.format("%a").to_string());
    }

    let rows = employees
        .iter()
        .map(|emp| {
            let mut row = vec![
                emp.area.clone(),
                emp.tech_number.clone(),
                emp.first_name.clone(),
                emp.last_name.clone(),
                emp.supervisor_display_name.clone(),
                "Working".to_string(),
            ];
            row.extend(window.dates.iter().map(|d| emp.entry_for(*d).label()));
            row
        })
        .collect();

    ExportTable {
        header,
        subheader,
        rows,
    }
}
