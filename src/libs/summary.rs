//! Aggregation of worked minutes over time windows.
//!
//! A shift is counted in a window when its effective start falls inside the
//! half-open interval `[start, end)`. A shift starting exactly on a boundary
//! therefore belongs to the window that begins there, and never to two
//! adjacent day, week or month buckets.
//!
//! What a shift contributes:
//!
//! | status   | minutes                          |
//! |----------|----------------------------------|
//! | Finished | `final_duration` (pause applied) |
//! | Running  | `live_duration` at `now`         |
//! | Planned  | 0                                |

use crate::libs::duration::{final_duration, live_duration};
use crate::libs::shift::{Shift, ShiftStatus};
use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self::new(midnight(date), midnight(next_day(date)))
    }

    /// The Monday-to-Sunday week containing `date`.
    pub fn week(date: NaiveDate) -> Self {
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        let next_monday = monday.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
        Self::new(midnight(monday), midnight(next_monday))
    }

    /// The calendar month containing `date`.
    pub fn month(date: NaiveDate) -> Self {
        let first = first_of_month(date);
        let next_first = first.checked_add_months(Months::new(1)).unwrap_or(NaiveDate::MAX);
        Self::new(midnight(first), midnight(next_first))
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    /// The calendar days whose midnight lies inside the window.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut day = self.start.date();
        if midnight(day) < self.start {
            day = next_day(day);
        }
        while midnight(day) < self.end && day < NaiveDate::MAX {
            days.push(day);
            day = next_day(day);
        }
        days
    }
}

/// Minutes per day bucket, ready for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub label: String,
    pub minutes: i64,
}

/// The figures shown on the statistics dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub week_minutes: i64,
    pub month_minutes: i64,
    pub average_per_shift: Option<i64>,
}

impl Stats {
    /// Totals for the week and month containing `now`.
    pub fn compute(shifts: &[Shift], now: NaiveDateTime) -> Self {
        Self::for_date(shifts, now.date(), now)
    }

    /// Totals for the week and month containing `date`, with running shifts
    /// measured up to `now`.
    pub fn for_date(shifts: &[Shift], date: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            week_minutes: total_minutes(shifts, &Window::week(date), now),
            month_minutes: total_minutes(shifts, &Window::month(date), now),
            average_per_shift: average_per_shift(shifts, now),
        }
    }
}

/// Minutes a single shift contributes to any aggregate at `now`.
pub fn contribution(shift: &Shift, now: NaiveDateTime) -> i64 {
    match shift.status() {
        ShiftStatus::Finished => final_duration(shift).unwrap_or(0),
        ShiftStatus::Running => live_duration(shift, now),
        ShiftStatus::Planned => 0,
    }
}

pub fn total_minutes(shifts: &[Shift], window: &Window, now: NaiveDateTime) -> i64 {
    shifts
        .iter()
        .filter(|s| window.contains(s.effective_start()))
        .map(|s| contribution(s, now))
        .sum()
}

/// One bucket per entry of `days`, in the given order.
pub fn daily_series(shifts: &[Shift], days: &[NaiveDate], now: NaiveDateTime) -> Vec<DailySummary> {
    days.iter()
        .map(|&date| DailySummary {
            date,
            label: date.format("%a %-d").to_string(),
            minutes: total_minutes(shifts, &Window::day(date), now),
        })
        .collect()
}

/// Rounded mean over the shifts that contribute a non-zero amount.
pub fn average_per_shift(shifts: &[Shift], now: NaiveDateTime) -> Option<i64> {
    let contributions: Vec<i64> = shifts.iter().map(|s| contribution(s, now)).filter(|m| *m > 0).collect();
    if contributions.is_empty() {
        return None;
    }

    let count = contributions.len() as i64;
    let total: i64 = contributions.iter().sum();
    Some((total + count / 2) / count)
}

/// Days of a month grid: from the Monday on or before the first of the month
/// to the Sunday on or after its last day.
pub fn calendar_days(month: NaiveDate) -> Vec<NaiveDate> {
    let window = Window::month(month);
    let first = window.start.date();
    let last = window.end.date().pred_opt().unwrap_or(first);

    let grid = Window::new(Window::week(first).start, Window::week(last).end);
    grid.days()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}
