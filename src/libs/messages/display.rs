//! Display implementation for application messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent across commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SHIFT MESSAGES ===
            Message::ShiftPlanned(start) => format!("Shift planned for {}", start),
            Message::ShiftRecorded(duration) => format!("Past shift recorded ({})", duration),
            Message::ShiftStartedAt(start) => format!("Shift started at {}", start),
            Message::ShiftFinished(duration) => format!("Shift finished, worked {}", duration),
            Message::ShiftUpdated => "Shift updated".to_string(),
            Message::ShiftDeleted => "Shift deleted".to_string(),
            Message::ShiftNotFound(id) => format!("No shift found with id '{}'", id),
            Message::ShiftIdAmbiguous(prefix) => format!("Id '{}' matches more than one shift, use more characters", prefix),
            Message::ShiftsAutoStarted(count) => format!("{} planned shift(s) started", count),
            Message::ShiftRejected(reason) => format!("Shift unchanged: {}", reason),
            Message::NoShiftsForWeek => "No shifts this week".to_string(),
            Message::NothingToEdit => "Nothing to edit: pass --start, --end or --pause".to_string(),

            // === HOME MESSAGES ===
            Message::RunningShift(since, elapsed) => format!("Shift running since {} ({})", since, elapsed),
            Message::NoRunningShift => "No shift is running".to_string(),
            Message::NextShift(start) => format!("Next shift: {}", start),
            Message::NoUpcomingShift => "No upcoming shift planned".to_string(),
            Message::TotalWorked(total) => format!("Total: {}", total),

            // === VIEW HEADERS ===
            Message::WeekHeader(from, to) => format!("Shifts {} - {}", from, to),
            Message::StatsHeader(period) => format!("Worked hours for {}", period),
            Message::CalendarHeader(month) => format!("Calendar for {}", month),

            // === PROMPTS ===
            Message::PromptUseCurrentEndTime(time) => format!("Use the current time as end time? ({})", time),
            Message::PromptEndTime => "End time (YYYY-MM-DD HH:MM)".to_string(),
            Message::PromptHadPause => "Did you take a pause?".to_string(),
            Message::PromptPauseMinutes => "How many minutes of pause?".to_string(),
            Message::PromptOwner => "Owner id for your shifts".to_string(),
            Message::PromptTickInterval => "Seconds between checks for planned shifts".to_string(),
            Message::PromptLiveInterval => "Seconds between updates while a shift is running".to_string(),
            Message::PromptDeleteShift(start) => format!("Delete the shift of {}?", start),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleWatch => "Watch settings".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchStarted(interval) => format!("Watching shifts (checking every {}s), press Ctrl-C to stop", interval),
            Message::WatchStopped => "Stopped watching shifts".to_string(),
            Message::WatchReceivedCtrlC => "Received Ctrl-C, shutting down".to_string(),
            Message::WatchSignalFailed(e) => format!("Could not listen for Ctrl-C: {}", e),
            Message::WatchLoadFailed(e) => format!("Could not load shifts, keeping the last snapshot: {}", e),
            Message::WatchSaveFailed(e) => format!("Could not save shifts: {}", e),
            Message::LiveDuration(elapsed) => format!("Working for {}", elapsed),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(count, path) => format!("Exported {} shift(s) to {}", count, path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, e) => format!("Migration v{} failed: {}", version, e),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),

            // === GENERIC ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
