use super::Session;
use crate::{
    libs::{
        formatter::format_minutes,
        messages::Message,
        summary::{calendar_days, daily_series, total_minutes, Window},
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(long, short)]
    month: Option<String>,
}

pub fn cmd(args: CalendarArgs) -> Result<()> {
    let month = match &args.month {
        Some(value) => NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")?,
        None => Local::now().date_naive(),
    };

    let session = Session::open()?;
    let grid = daily_series(&session.shifts, &calendar_days(month), session.now);
    let total = total_minutes(&session.shifts, &Window::month(month), session.now);

    msg_print!(Message::CalendarHeader(month.format("%B %Y").to_string()));
    View::calendar(month, &grid, &session.shifts, session.now);
    msg_print!(Message::TotalWorked(format_minutes(total)));
    Ok(())
}
