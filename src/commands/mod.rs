pub mod add;
pub mod calendar;
pub mod delete;
pub mod edit;
pub mod end;
pub mod export;
pub mod init;
pub mod list;
pub mod start;
pub mod stats;
pub mod watch;

use crate::db::shifts::{ShiftStore, Shifts};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::{lifecycle, scheduler};
use crate::libs::shift::{parse_timestamp, Shift};
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Plan a shift, or record a past one")]
    Add(add::AddArgs),
    #[command(about = "Start a planned shift now")]
    Start(start::StartArgs),
    #[command(about = "Finish the running shift")]
    End(end::EndArgs),
    #[command(about = "Correct the start, end or pause of a shift")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a shift")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the shifts of a week")]
    List(list::ListArgs),
    #[command(about = "Show weekly and monthly worked hours")]
    Stats(stats::StatsArgs),
    #[command(about = "Show a month calendar with worked hours per day")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Start planned shifts automatically and show live progress")]
    Watch(watch::WatchArgs),
    #[command(about = "Export shifts as JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::Start(args) => start::cmd(args),
            Commands::End(args) => end::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Calendar(args) => calendar::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// The owner's shifts as seen by one command invocation.
///
/// Opening a session runs one auto-transition tick for the current time, so
/// every command works on an up-to-date snapshot.
pub struct Session {
    store: Shifts,
    owner: String,
    pub shifts: Vec<Shift>,
    pub now: NaiveDateTime,
}

impl Session {
    pub fn open() -> Result<Self> {
        let config = Config::read()?;
        let store = Shifts::new()?;
        let owner = config.owner_id();
        let shifts = store.load_shifts(&owner)?;

        let mut session = Self {
            store,
            owner,
            shifts,
            now: Local::now().naive_local(),
        };
        session.tick()?;
        Ok(session)
    }

    /// Runs one tick; writes only when something changed.
    pub fn tick(&mut self) -> Result<()> {
        let due = self.shifts.iter().filter(|s| scheduler::is_due(s, self.now)).count();
        let (next, changed) = scheduler::advance(&self.shifts, self.now);
        if changed {
            self.commit(next)?;
            msg_info!(Message::ShiftsAutoStarted(due));
        }
        Ok(())
    }

    /// Persists `next` and makes it the current snapshot.
    pub fn commit(&mut self, next: Vec<Shift>) -> Result<()> {
        self.store.save_shifts(&self.owner, &next)?;
        self.shifts = next;
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.store.delete_shift(id)?;
        self.shifts = lifecycle::remove(&self.shifts, id);
        Ok(())
    }

    /// Resolves a full id or a unique id prefix.
    pub fn resolve_id(&self, input: &str) -> Result<String> {
        let input = input.trim();
        if self.shifts.iter().any(|s| s.id == input) {
            return Ok(input.to_string());
        }

        let matches: Vec<&Shift> = self.shifts.iter().filter(|s| s.id.starts_with(input)).collect();
        match matches.as_slice() {
            [shift] => Ok(shift.id.clone()),
            [] => msg_bail_anyhow!(Message::ShiftNotFound(input.to_string())),
            _ => msg_bail_anyhow!(Message::ShiftIdAmbiguous(input.to_string())),
        }
    }
}

/// Parses an optional timestamp argument, defaulting to `now`.
pub fn timestamp_or(input: Option<&str>, now: NaiveDateTime) -> Result<NaiveDateTime> {
    match input {
        Some(value) => Ok(parse_timestamp(value)?),
        None => Ok(now),
    }
}

/// Parses `YYYY-MM-DD` or `today`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if input.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")?)
    }
}
