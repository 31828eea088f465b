//! Calendar-window navigation.
//!
//! The anchor a user navigates with and the start of the displayed window
//! are deliberately decoupled: paging moves the anchor by whole window
//! lengths, while the window itself always re-derives its Sunday-aligned
//! start from wherever the anchor currently sits.

use chrono::{Datelike, Days, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: u32 = 14;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub dates: Vec<NaiveDate>,
}

/// The visible window for an anchor date: `days` consecutive dates starting
/// at the Sunday on or before the anchor.
pub fn window_for(anchor: NaiveDate, days: u32) -> Window {
    let days = days.max(1);
    let back = anchor.weekday().num_days_from_sunday();
    let start = anchor - Days::new(u64::from(back));
    let dates: Vec<NaiveDate> = start.iter_days().take(days as usize).collect();
    let end = *dates.last().unwrap_or(&start);
    Window { start, end, dates }
}

/// Move the anchor by a signed number of days (±window size for paging).
pub fn advance(anchor: NaiveDate, delta_days: i64) -> NaiveDate {
    if delta_days >= 0 {
        anchor + Days::new(delta_days as u64)
    } else {
        anchor - Days::new(delta_days.unsigned_abs())
    }
}
