//! Time formatting for display.
//!
//! Two formats are used throughout the application:
//!
//! - [`format_minutes`]: worked time as `"8h 5min"`, used on shift lists,
//!   totals and chart labels.
//! - [`format_duration`]: a `chrono::Duration` as `"HH:MM"`, used for live
//!   elapsed time.
//!
//! Negative inputs are shown as zero; formatting never fails.
//!
//! ```rust
//! use shiftlog::libs::formatter::{format_duration, format_minutes};
//! use chrono::Duration;
//!
//! assert_eq!(format_minutes(450), "7h 30min");
//! assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
//! ```

use crate::libs::shift::{Shift, ShiftGroup, ShiftStatus};
use crate::libs::summary::DailySummary;
use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A shift with every field pre-formatted for table rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedShift {
    /// Short form of the shift id (first 8 characters).
    pub id: String,
    pub date: String,
    pub start: String,
    /// `"-"` while the shift has no end.
    pub end: String,
    pub pause: String,
    /// `"--"` for planned shifts.
    pub duration: String,
    pub status: String,
}

/// Formats whole minutes as `"{h}h {m}min"`.
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{}h {}min", minutes / 60, minutes % 60)
}

/// Formats a duration as zero-padded `"HH:MM"`.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Text of one month-calendar cell: the day number, one line per shift
/// starting that day, then the day's worked total.
///
/// Finished shifts show `start-end`, a running shift is marked `▶` and the
/// next planned shift is marked `★`.
pub fn format_calendar_day(day: &DailySummary, shifts: &[Shift], now: NaiveDateTime) -> String {
    let next_id = shifts.next_planned(now).map(|s| s.id.as_str());

    let mut lines = vec![format!("{:>2}", day.date.day())];
    for shift in shifts.on_day(day.date) {
        let start = shift.effective_start().format("%H:%M");
        let line = match (shift.status(), shift.end) {
            (ShiftStatus::Finished, Some(end)) => format!("{}-{}", start, end.format("%H:%M")),
            (ShiftStatus::Running, _) => format!("{} ▶", start),
            _ if Some(shift.id.as_str()) == next_id => format!("{} ★", start),
            _ => start.to_string(),
        };
        lines.push(line);
    }
    if day.minutes > 0 {
        lines.push(format_minutes(day.minutes));
    }
    lines.join("\n")
}
