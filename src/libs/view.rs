//! Console table rendering.
//!
//! Every function takes data that is already computed (formatted shifts,
//! stats, daily buckets) and prints it with `prettytable`. Nothing here reads
//! the store or the clock.

use crate::libs::formatter::{format_calendar_day, format_minutes, FormattedShift};
use crate::libs::shift::Shift;
use crate::libs::summary::{DailySummary, Stats};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use prettytable::{row, Cell, Row, Table};

/// Width in characters of a full daily bar.
const BAR_WIDTH: i64 = 20;
/// Worked minutes that fill a daily bar; longer days are capped.
const BAR_FULL_MINUTES: i64 = 10 * 60;

/// Namespace for the table printers.
pub struct View {}

impl View {
    /// One row per shift, in the order given.
    pub fn shifts(shifts: &[FormattedShift]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "START", "END", "PAUSE", "DURATION", "STATUS"]);
        for shift in shifts {
            table.add_row(row![shift.id, shift.date, shift.start, shift.end, shift.pause, shift.duration, shift.status]);
        }
        table.printstd();
    }

    /// Week total, month total and average per shift (`-` when no shift
    /// has contributed yet).
    pub fn stats(stats: &Stats) {
        let mut table = Table::new();

        table.add_row(row!["THIS WEEK", "THIS MONTH", "AVERAGE / SHIFT"]);
        table.add_row(row![
            format_minutes(stats.week_minutes),
            format_minutes(stats.month_minutes),
            stats.average_per_shift.map_or_else(|| "-".to_string(), format_minutes)
        ]);
        table.printstd();
    }

    /// One row per day with a proportional bar.
    pub fn series(series: &[DailySummary]) {
        let mut table = Table::new();

        table.add_row(row!["DAY", "WORKED", ""]);
        for day in series {
            let filled = (day.minutes.min(BAR_FULL_MINUTES) * BAR_WIDTH / BAR_FULL_MINUTES) as usize;
            let worked = if day.minutes > 0 { format_minutes(day.minutes) } else { "-".to_string() };
            table.add_row(row![day.label, worked, "█".repeat(filled)]);
        }
        table.printstd();
    }

    /// Month grid, Monday first. Days outside `month` are left blank.
    ///
    /// Each cell lists the shifts starting that day, see [`format_calendar_day`].
    pub fn calendar(month: NaiveDate, grid: &[DailySummary], shifts: &[Shift], now: NaiveDateTime) {
        let mut table = Table::new();
        table.add_row(row!["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"]);

        for week in grid.chunks(7) {
            let cells = week
                .iter()
                .map(|day| {
                    if day.date.month() != month.month() || day.date.year() != month.year() {
                        return Cell::new("");
                    }
                    Cell::new(&format_calendar_day(day, shifts, now))
                })
                .collect();
            table.add_row(Row::new(cells));
        }
        table.printstd();
    }
}
