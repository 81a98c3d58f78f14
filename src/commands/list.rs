use super::{parse_date, Session};
use crate::{
    libs::{
        duration::live_duration,
        formatter::format_minutes,
        messages::Message,
        shift::{Shift, ShiftGroup},
        summary::{total_minutes, Window},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Any day of the week to show (YYYY-MM-DD or "today")
    #[arg(long, short, default_value = "today")]
    date: String,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let session = Session::open()?;
    let date = parse_date(&args.date)?;
    let now = session.now;

    match session.shifts.running() {
        Some(shift) => msg_print!(Message::RunningShift(
            shift.effective_start().format("%H:%M").to_string(),
            format_minutes(live_duration(shift, now))
        )),
        None => msg_info!(Message::NoRunningShift),
    }
    match session.shifts.next_planned(now) {
        Some(shift) => msg_print!(Message::NextShift(shift.start.format("%a %d.%m.%Y %H:%M").to_string())),
        None => msg_info!(Message::NoUpcomingShift),
    }

    let window = Window::week(date);
    let mut week: Vec<Shift> = session
        .shifts
        .iter()
        .filter(|s| window.contains(s.effective_start()))
        .cloned()
        .collect();
    week.sort_by_key(|s| s.effective_start());

    let last_day = window.days().last().copied().unwrap_or(date);
    msg_print!(
        Message::WeekHeader(window.start.format("%d.%m.%Y").to_string(), last_day.format("%d.%m.%Y").to_string()),
        true
    );
    if week.is_empty() {
        msg_info!(Message::NoShiftsForWeek);
        return Ok(());
    }
    View::shifts(&week.format(now));
    msg_print!(Message::TotalWorked(format_minutes(total_minutes(&week, &window, now))));
    Ok(())
}
