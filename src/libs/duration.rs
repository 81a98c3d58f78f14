//! Worked-time calculation for single shifts.
//!
//! All functions are pure: the current time is always passed in by the caller.
//! Minutes are whole minutes, truncated toward zero.
//!
//! Pause is only deducted at finalization. [`live_duration`] reports elapsed
//! time while a shift runs; [`final_duration`] reports the billable result.

use crate::libs::shift::{Shift, ShiftStatus};
use chrono::NaiveDateTime;

/// The actual start if known, else the planned start.
pub fn effective_start(shift: &Shift) -> NaiveDateTime {
    shift.actual_start.unwrap_or(shift.start)
}

/// `max(0, minutes(end - start) - pause)`.
pub fn worked_minutes(start: NaiveDateTime, end: NaiveDateTime, pause_minutes: u32) -> i64 {
    ((end - start).num_minutes() - pause_minutes as i64).max(0)
}

/// The finalized duration, computing it from `end` when it was not stored.
/// `None` while the shift has no end.
pub fn final_duration(shift: &Shift) -> Option<i64> {
    if let Some(minutes) = shift.duration_minutes {
        return Some(minutes);
    }
    shift.end.map(|end| worked_minutes(effective_start(shift), end, shift.pause_minutes))
}

/// Elapsed minutes of a running shift at `now`; 0 for any other shift.
pub fn live_duration(shift: &Shift, now: NaiveDateTime) -> i64 {
    if shift.status() != ShiftStatus::Running {
        return 0;
    }
    (now - effective_start(shift)).num_minutes().max(0)
}
