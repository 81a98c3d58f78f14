//! Shift state machine.
//!
//! ```text
//! Planned ──start──▶ Running ──finish──▶ Finished
//!    │                  │                   │
//!    └──────────────────┴──── remove ───────┘
//! ```
//!
//! `edit` is legal in every state. Each transition takes a shift (or a
//! collection) by reference and returns a new value; on error nothing is
//! returned, so the caller's data is left untouched.

use crate::libs::duration::{effective_start, worked_minutes};
use crate::libs::error::{ShiftError, ShiftResult};
use crate::libs::shift::{parse_pause, parse_timestamp, Shift, ShiftStatus, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;

/// Field corrections applied by [`edit`]. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftPatch {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub pause_minutes: Option<u32>,
}

impl ShiftPatch {
    /// Builds a patch from raw prompt values. Empty strings count as absent.
    pub fn from_input(start: Option<&str>, end: Option<&str>, pause_minutes: Option<&str>) -> ShiftResult<Self> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        Ok(Self {
            start: present(start).map(parse_timestamp).transpose()?,
            end: present(end).map(parse_timestamp).transpose()?,
            pause_minutes: present(pause_minutes).map(parse_pause).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.pause_minutes.is_none()
    }
}

/// Planned → Running, with `actual_start = at`.
pub fn start(shift: &Shift, at: NaiveDateTime) -> ShiftResult<Shift> {
    let status = shift.status();
    if status != ShiftStatus::Planned {
        return Err(ShiftError::InvalidTransition { action: "start", from: status });
    }

    let mut started = shift.clone();
    started.actual_start = Some(at);
    started.running = true;

    tracing::debug!(id = %shift.id, at = %at, "shift started");
    Ok(started)
}

/// Running → Finished. `end` must be strictly after the effective start.
pub fn finish(shift: &Shift, end: NaiveDateTime, pause_minutes: u32) -> ShiftResult<Shift> {
    let status = shift.status();
    if status != ShiftStatus::Running {
        return Err(ShiftError::InvalidTransition { action: "finish", from: status });
    }

    let from = effective_start(shift);
    ensure_after(from, end)?;

    let mut finished = shift.clone();
    finished.end = Some(end);
    finished.pause_minutes = pause_minutes;
    finished.duration_minutes = Some(worked_minutes(from, end, pause_minutes));
    finished.running = false;

    tracing::debug!(id = %shift.id, end = %end, minutes = ?finished.duration_minutes, "shift finished");
    Ok(finished)
}

/// [`finish`] with raw end-time and pause strings from an input prompt.
pub fn finish_from_input(shift: &Shift, end: &str, pause_minutes: &str) -> ShiftResult<Shift> {
    finish(shift, parse_timestamp(end)?, parse_pause(pause_minutes)?)
}

/// Applies field corrections.
///
/// Correcting the start of a shift that already has an actual start moves both,
/// so the edited start is what durations are computed from. When the edited
/// shift has an end, its duration is recomputed.
pub fn edit(shift: &Shift, patch: &ShiftPatch) -> ShiftResult<Shift> {
    let mut edited = shift.clone();

    if let Some(start) = patch.start {
        edited.start = start;
        if edited.actual_start.is_some() {
            edited.actual_start = Some(start);
        }
    }
    if let Some(end) = patch.end {
        edited.end = Some(end);
    }
    if let Some(pause_minutes) = patch.pause_minutes {
        edited.pause_minutes = pause_minutes;
    }

    match edited.end {
        Some(end) => {
            let from = effective_start(&edited);
            ensure_after(from, end)?;
            edited.duration_minutes = Some(worked_minutes(from, end, edited.pause_minutes));
            edited.running = false;
        }
        None => edited.duration_minutes = None,
    }

    tracing::debug!(id = %shift.id, ?patch, "shift edited");
    Ok(edited)
}

/// Removes the shift with `id`. Removing an unknown id is a no-op.
pub fn remove(shifts: &[Shift], id: &str) -> Vec<Shift> {
    shifts.iter().filter(|s| s.id != id).cloned().collect()
}

/// Adds `shift` to the collection, replacing a shift with the same id.
pub fn add(shifts: &[Shift], shift: Shift) -> Vec<Shift> {
    let mut next = remove(shifts, &shift.id);
    next.push(shift);
    next
}

pub fn start_by_id(shifts: &[Shift], id: &str, at: NaiveDateTime) -> ShiftResult<Vec<Shift>> {
    apply(shifts, id, |shift| start(shift, at))
}

pub fn finish_by_id(shifts: &[Shift], id: &str, end: NaiveDateTime, pause_minutes: u32) -> ShiftResult<Vec<Shift>> {
    apply(shifts, id, |shift| finish(shift, end, pause_minutes))
}

pub fn edit_by_id(shifts: &[Shift], id: &str, patch: &ShiftPatch) -> ShiftResult<Vec<Shift>> {
    apply(shifts, id, |shift| edit(shift, patch))
}

fn apply<F>(shifts: &[Shift], id: &str, transition: F) -> ShiftResult<Vec<Shift>>
where
    F: FnOnce(&Shift) -> ShiftResult<Shift>,
{
    let index = shifts
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| ShiftError::NotFound(id.to_string()))?;

    let updated = transition(&shifts[index])?;
    let mut next = shifts.to_vec();
    next[index] = updated;
    Ok(next)
}

fn ensure_after(start: NaiveDateTime, end: NaiveDateTime) -> ShiftResult<()> {
    if end <= start {
        return Err(ShiftError::InvalidInput(format!(
            "end {} must be after start {}",
            end.format(TIMESTAMP_FORMAT),
            start.format(TIMESTAMP_FORMAT)
        )));
    }
    Ok(())
}
