use super::Session;
use crate::{
    libs::{
        duration::final_duration,
        formatter::format_minutes,
        lifecycle,
        messages::Message,
        shift::{parse_pause, parse_timestamp, ShiftGroup},
    },
    msg_error_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct EndArgs {
    /// Shift id or unique id prefix, defaults to the running shift
    id: Option<String>,

    /// End time (YYYY-MM-DD HH:MM)
    #[arg(long)]
    at: Option<String>,

    /// Pause in minutes
    #[arg(long, short)]
    pause: Option<String>,

    /// Use the current time and no pause without asking
    #[arg(long, short)]
    yes: bool,
}

pub fn cmd(args: EndArgs) -> Result<()> {
    let mut session = Session::open()?;

    let id = match &args.id {
        Some(input) => session.resolve_id(input)?,
        None => match session.shifts.running() {
            Some(shift) => shift.id.clone(),
            None => {
                msg_warning!(Message::NoRunningShift);
                return Ok(());
            }
        },
    };

    let end = match &args.at {
        Some(value) => parse_timestamp(value)?,
        None if args.yes => session.now,
        None => prompt_end(session.now)?,
    };
    let pause = match &args.pause {
        Some(value) => parse_pause(value)?,
        None if args.yes => 0,
        None => prompt_pause()?,
    };

    let next = lifecycle::finish_by_id(&session.shifts, &id, end, pause).map_err(|e| msg_error_anyhow!(Message::ShiftRejected(e.to_string())))?;
    let worked = next.find(&id).and_then(final_duration).unwrap_or(0);
    session.commit(next)?;

    msg_success!(Message::ShiftFinished(format_minutes(worked)));
    Ok(())
}

fn prompt_end(now: NaiveDateTime) -> Result<NaiveDateTime> {
    let use_now = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptUseCurrentEndTime(now.format("%H:%M").to_string()).to_string())
        .default(true)
        .interact()?;
    if use_now {
        return Ok(now);
    }

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEndTime.to_string())
        .with_initial_text(now.format("%Y-%m-%d %H:%M").to_string())
        .interact_text()?;
    Ok(parse_timestamp(&input)?)
}

fn prompt_pause() -> Result<u32> {
    let had_pause = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptHadPause.to_string())
        .default(false)
        .interact()?;
    if !had_pause {
        return Ok(0);
    }

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPauseMinutes.to_string())
        .default("30".to_string())
        .interact_text()?;
    Ok(parse_pause(&input)?)
}
