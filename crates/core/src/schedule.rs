//! Presenter handoff scheduling.

use chrono::Days;

use crate::types::Date;

/// Days between one status meeting and the next.
pub const PRESENTATION_INTERVAL_DAYS: u64 = 7;

/// Date of the next presentation given today's date.
pub fn next_presentation_date(today: Date) -> Date {
    today + Days::new(PRESENTATION_INTERVAL_DAYS)
}
