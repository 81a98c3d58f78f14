use super::Session;
use crate::{
    libs::{
        duration::final_duration,
        formatter::format_minutes,
        lifecycle,
        messages::Message,
        shift::{Shift, ShiftStatus},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Start time (YYYY-MM-DD HH:MM)
    #[arg(long, short)]
    start: String,

    /// End time; records an already finished shift
    #[arg(long, short)]
    end: Option<String>,

    /// Pause in minutes, used with --end
    #[arg(long, short, requires = "end")]
    pause: Option<String>,

    /// The shift has already started and is running
    #[arg(long, conflicts_with = "end")]
    started: bool,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut session = Session::open()?;

    let shift = match (&args.end, args.started) {
        (Some(end), _) => Shift::create_backdated(&args.start, end, args.pause.as_deref().unwrap_or("0"))?,
        (None, true) => Shift::create_started(&args.start)?,
        (None, false) => Shift::create_planned(&args.start)?,
    };

    let status = shift.status();
    let start = shift.start.format("%d.%m.%Y %H:%M").to_string();
    let worked = final_duration(&shift).map(format_minutes);

    session.commit(lifecycle::add(&session.shifts, shift))?;
    session.tick()?;

    match (status, worked) {
        (ShiftStatus::Finished, Some(worked)) => msg_success!(Message::ShiftRecorded(worked)),
        (ShiftStatus::Running, _) => msg_success!(Message::ShiftStartedAt(start)),
        _ => msg_success!(Message::ShiftPlanned(start)),
    }
    Ok(())
}
