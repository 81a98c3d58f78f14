//! Shift record model and input parsing.
//!
//! A [`Shift`] is the single entity the engine works on. Its status is never
//! stored as an independent fact; it is derived from the fields that are
//! present (see [`Shift::status`]), which lets records written as either an
//! explicit `status` string or a `running` flag be handled by one rule.
//!
//! ## Representations
//!
//! - [`Shift`]: the strongly typed, validated form used by every engine function.
//! - [`ShiftRecord`]: the loosely typed persisted form (camelCase JSON, optional
//!   strings and arbitrary numeric values). [`ShiftRecord::normalize`] turns it
//!   into a `Shift`, recovering from malformed optional fields instead of failing.
//!
//! ## Usage
//!
//! ```rust
//! use shiftlog::libs::shift::{Shift, ShiftStatus};
//!
//! let shift = Shift::create_backdated("2024-01-01T08:00", "2024-01-01T16:00", "30")?;
//! assert_eq!(shift.status(), ShiftStatus::Finished);
//! assert_eq!(shift.duration_minutes, Some(450));
//! # Ok::<(), shiftlog::libs::error::ShiftError>(())
//! ```

use crate::libs::duration::{self, worked_minutes};
use crate::libs::error::{ShiftError, ShiftResult};
use crate::libs::formatter::{format_minutes, FormattedShift};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Canonical timestamp format used when writing shifts.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Local (timezone-naive) formats accepted from user input and stored records.
const LOCAL_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Lifecycle state of a shift. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Planned,
    Running,
    Finished,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Planned => "planned",
            ShiftStatus::Running => "running",
            ShiftStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftStatus {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(ShiftStatus::Planned),
            "running" => Ok(ShiftStatus::Running),
            "finished" => Ok(ShiftStatus::Finished),
            other => Err(ShiftError::InvalidInput(format!("unknown shift status '{}'", other))),
        }
    }
}

/// A single work session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    /// Opaque identifier, assigned at creation and never changed.
    pub id: String,
    /// Planned (or back-dated) beginning of the shift.
    pub start: NaiveDateTime,
    /// Set when the shift starts running.
    pub actual_start: Option<NaiveDateTime>,
    /// Set when the shift is finished.
    pub end: Option<NaiveDateTime>,
    /// Minutes deducted from worked time at finalization.
    pub pause_minutes: u32,
    /// Finalized worked minutes, present once `end` is set.
    pub duration_minutes: Option<i64>,
    /// Explicit running flag carried by records that do not store `actual_start`.
    pub running: bool,
}

impl Shift {
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// A shift planned to begin at `start`.
    pub fn planned(start: NaiveDateTime) -> Self {
        Self {
            id: Self::new_id(),
            start,
            actual_start: None,
            end: None,
            pause_minutes: 0,
            duration_minutes: None,
            running: false,
        }
    }

    /// A shift that is already running since `start`.
    pub fn started(start: NaiveDateTime) -> Self {
        Self {
            actual_start: Some(start),
            running: true,
            ..Self::planned(start)
        }
    }

    /// A shift recorded after the fact, immediately finished.
    pub fn backdated(start: NaiveDateTime, end: NaiveDateTime, pause_minutes: u32) -> ShiftResult<Self> {
        if end <= start {
            return Err(ShiftError::InvalidInput(format!(
                "end {} must be after start {}",
                end.format(TIMESTAMP_FORMAT),
                start.format(TIMESTAMP_FORMAT)
            )));
        }

        Ok(Self {
            actual_start: Some(start),
            end: Some(end),
            pause_minutes,
            duration_minutes: Some(worked_minutes(start, end, pause_minutes)),
            ..Self::planned(start)
        })
    }

    pub fn create_planned(start: &str) -> ShiftResult<Self> {
        Ok(Self::planned(parse_timestamp(start)?))
    }

    pub fn create_started(start: &str) -> ShiftResult<Self> {
        Ok(Self::started(parse_timestamp(start)?))
    }

    pub fn create_backdated(start: &str, end: &str, pause_minutes: &str) -> ShiftResult<Self> {
        Self::backdated(parse_timestamp(start)?, parse_timestamp(end)?, parse_pause(pause_minutes)?)
    }

    /// Finished if `end` is present, Running if an actual start or the running
    /// flag is present, Planned otherwise.
    pub fn status(&self) -> ShiftStatus {
        if self.end.is_some() {
            ShiftStatus::Finished
        } else if self.actual_start.is_some() || self.running {
            ShiftStatus::Running
        } else {
            ShiftStatus::Planned
        }
    }

    pub fn effective_start(&self) -> NaiveDateTime {
        duration::effective_start(self)
    }
}

/// Parses a timestamp from user input or a stored record.
///
/// RFC 3339 values carrying an offset are converted to the host's local time;
/// everything else is read as a local wall-clock time.
pub fn parse_timestamp(input: &str) -> ShiftResult<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ShiftError::InvalidInput("timestamp is empty".to_string()));
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Local).naive_local());
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ShiftError::InvalidInput(format!("'{}' is not a valid timestamp", trimmed)))
}

/// Parses pause minutes the way a lenient number prompt would.
///
/// The leading integer is used (`"45 min"` is 45). Empty or non-numeric input
/// recovers to 0; a negative value is rejected.
pub fn parse_pause(input: &str) -> ShiftResult<u32> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.trim_start().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        if !trimmed.is_empty() {
            tracing::warn!(input = trimmed, "non-numeric pause treated as 0 minutes");
        }
        return Ok(0);
    }

    let minutes: u32 = digits
        .parse()
        .map_err(|_| ShiftError::InvalidInput(format!("pause '{}' is too large", trimmed)))?;

    if negative && minutes > 0 {
        return Err(ShiftError::InvalidInput(format!("pause must not be negative, got '{}'", trimmed)));
    }
    Ok(minutes)
}

/// Loosely typed persisted form of a shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "plannedStart", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_minutes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
}

impl ShiftRecord {
    /// Converts the record into a [`Shift`].
    ///
    /// Returns `None` only when the record has no id or no readable start.
    /// Unreadable optional timestamps are dropped, a malformed pause becomes 0
    /// and a malformed stored duration is discarded so it gets recomputed. A
    /// stored duration without an end is dropped too.
    pub fn normalize(&self) -> Option<Shift> {
        if self.id.trim().is_empty() {
            tracing::warn!("skipping shift record without id");
            return None;
        }

        let start = match self.start.as_deref().map(parse_timestamp) {
            Some(Ok(start)) => start,
            _ => {
                tracing::warn!(id = %self.id, start = ?self.start, "skipping shift record without a readable start");
                return None;
            }
        };

        let actual_start = self.optional_timestamp("actualStart", self.actual_start.as_deref());
        let end = self.optional_timestamp("end", self.end.as_deref());

        let status = match self.status.as_deref().map(ShiftStatus::from_str) {
            Some(Ok(status)) => Some(status),
            Some(Err(_)) => {
                tracing::warn!(id = %self.id, status = ?self.status, "ignoring unknown shift status");
                None
            }
            None => None,
        };
        let running = end.is_none() && (self.running.unwrap_or(false) || status == Some(ShiftStatus::Running));

        Some(Shift {
            id: self.id.clone(),
            start,
            actual_start,
            end,
            pause_minutes: pause_from_value(self.pause_minutes.as_ref()),
            duration_minutes: end.and_then(|_| minutes_from_value(self.duration_minutes.as_ref())),
            running,
        })
    }

    fn optional_timestamp(&self, field: &str, value: Option<&str>) -> Option<NaiveDateTime> {
        let raw = value?;
        match parse_timestamp(raw) {
            Ok(timestamp) => Some(timestamp),
            Err(_) => {
                tracing::warn!(id = %self.id, field, value = raw, "ignoring unreadable timestamp");
                None
            }
        }
    }
}

impl From<&Shift> for ShiftRecord {
    fn from(shift: &Shift) -> Self {
        let status = shift.status();
        Self {
            id: shift.id.clone(),
            start: Some(shift.start.format(TIMESTAMP_FORMAT).to_string()),
            actual_start: shift.actual_start.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            end: shift.end.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            pause_minutes: Some(Value::from(shift.pause_minutes)),
            duration_minutes: shift.duration_minutes.map(Value::from),
            status: Some(status.to_string()),
            running: Some(status == ShiftStatus::Running),
        }
    }
}

fn pause_from_value(value: Option<&Value>) -> u32 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Number(number)) => match number.as_f64() {
            Some(minutes) if minutes.is_finite() && minutes >= 0.0 => minutes.round().min(u32::MAX as f64) as u32,
            _ => {
                tracing::warn!(pause = %number, "invalid pause treated as 0 minutes");
                0
            }
        },
        Some(Value::String(text)) => parse_pause(text).unwrap_or_else(|e| {
            tracing::warn!(pause = %text, error = %e, "invalid pause treated as 0 minutes");
            0
        }),
        Some(other) => {
            tracing::warn!(pause = %other, "invalid pause treated as 0 minutes");
            0
        }
    }
}

fn minutes_from_value(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number
            .as_f64()
            .filter(|minutes| minutes.is_finite() && *minutes >= 0.0)
            .map(|minutes| minutes.round() as i64),
        Value::String(text) => text.trim().parse::<i64>().ok().filter(|minutes| *minutes >= 0),
        _ => None,
    }
}

/// Queries over a shift collection.
pub trait ShiftGroup {
    /// The shift currently running, if any.
    fn running(&self) -> Option<&Shift>;
    /// The earliest planned shift starting after `now`.
    fn next_planned(&self, now: NaiveDateTime) -> Option<&Shift>;
    /// Shifts whose effective start falls on `date`, ordered by that start.
    fn on_day(&self, date: NaiveDate) -> Vec<&Shift>;
    fn find(&self, id: &str) -> Option<&Shift>;
    /// Formats the shifts for table display.
    fn format(&self, now: NaiveDateTime) -> Vec<FormattedShift>;
}

impl ShiftGroup for [Shift] {
    fn running(&self) -> Option<&Shift> {
        self.iter()
            .filter(|s| s.status() == ShiftStatus::Running)
            .min_by_key(|s| s.effective_start())
    }

    fn next_planned(&self, now: NaiveDateTime) -> Option<&Shift> {
        self.iter()
            .filter(|s| s.status() == ShiftStatus::Planned && s.start > now)
            .min_by_key(|s| s.start)
    }

    fn on_day(&self, date: NaiveDate) -> Vec<&Shift> {
        let mut shifts: Vec<&Shift> = self.iter().filter(|s| s.effective_start().date() == date).collect();
        shifts.sort_by_key(|s| s.effective_start());
        shifts
    }

    fn find(&self, id: &str) -> Option<&Shift> {
        self.iter().find(|s| s.id == id)
    }

    fn format(&self, now: NaiveDateTime) -> Vec<FormattedShift> {
        self.iter()
            .map(|s| {
                let status = s.status();
                let minutes = match status {
                    ShiftStatus::Finished => duration::final_duration(s),
                    ShiftStatus::Running => Some(duration::live_duration(s, now)),
                    ShiftStatus::Planned => None,
                };
                FormattedShift {
                    id: s.id.chars().take(8).collect(),
                    date: s.effective_start().format("%a %d.%m.%Y").to_string(),
                    start: s.effective_start().format("%H:%M").to_string(),
                    end: s.end.map_or_else(|| "-".to_string(), |e| e.format("%H:%M").to_string()),
                    pause: format_minutes(s.pause_minutes as i64),
                    duration: minutes.map_or_else(|| "--".to_string(), format_minutes),
                    status: status.to_string(),
                }
            })
            .collect()
    }
}
