//! Auto-transition of due shifts.
//!
//! A tick promotes every planned shift whose start has passed to running. The
//! actual start is set to the shift's own planned start, not to the tick time,
//! so a late tick does not shift the recorded start.
//!
//! There are no timers in here. The host decides how often to tick (see
//! [`tick_interval`]) and persists the result only when a tick changed
//! something.
//!
//! ```rust
//! use shiftlog::libs::{scheduler::advance, shift::Shift};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let now = start + chrono::Duration::minutes(5);
//!
//! let (shifts, changed) = advance(&[Shift::planned(start)], now);
//! assert!(changed);
//! assert_eq!(shifts[0].actual_start, Some(start));
//!
//! let (_, changed_again) = advance(&shifts, now);
//! assert!(!changed_again);
//! ```

use crate::libs::config::WatchConfig;
use crate::libs::lifecycle;
use crate::libs::shift::{Shift, ShiftGroup, ShiftStatus};
use chrono::NaiveDateTime;
use std::time::Duration;

/// Whether `shift` is planned and its start is at or before `now`.
pub fn is_due(shift: &Shift, now: NaiveDateTime) -> bool {
    shift.status() == ShiftStatus::Planned && shift.start <= now
}

/// Runs one tick against a snapshot of the collection.
///
/// Returns the new collection and whether any shift changed. Running,
/// finished and not-yet-due shifts are returned unchanged, which makes the
/// operation idempotent for a given `now`.
pub fn advance(shifts: &[Shift], now: NaiveDateTime) -> (Vec<Shift>, bool) {
    let mut changed = false;

    let next = shifts
        .iter()
        .map(|shift| {
            if !is_due(shift, now) {
                return shift.clone();
            }
            match lifecycle::start(shift, shift.start) {
                Ok(started) => {
                    changed = true;
                    started
                }
                Err(e) => {
                    tracing::warn!(id = %shift.id, error = %e, "due shift could not be started");
                    shift.clone()
                }
            }
        })
        .collect();

    if changed {
        tracing::debug!(now = %now, "tick started due shifts");
    }
    (next, changed)
}

/// How long the host should wait before the next tick: the live interval
/// while a shift is running, the regular tick interval otherwise.
pub fn tick_interval(shifts: &[Shift], config: &WatchConfig) -> Duration {
    let seconds = if shifts.running().is_some() {
        config.live_interval
    } else {
        config.tick_interval
    };
    Duration::from_secs(seconds.max(1))
}
