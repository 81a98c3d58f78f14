use super::{parse_date, Session};
use crate::{
    libs::{
        messages::Message,
        summary::{daily_series, Stats, Window},
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Reference day (YYYY-MM-DD or "today"), defaults to today
    #[arg(long, short)]
    date: Option<String>,

    /// Chart the whole month instead of the week
    #[arg(long, short)]
    month: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let session = Session::open()?;
    let (date, stats) = match &args.date {
        Some(value) => {
            let date = parse_date(value)?;
            (date, Stats::for_date(&session.shifts, date, session.now))
        }
        None => (session.now.date(), Stats::compute(&session.shifts, session.now)),
    };

    msg_print!(Message::StatsHeader(date.format("%d.%m.%Y").to_string()));
    View::stats(&stats);

    let window = if args.month { Window::month(date) } else { Window::week(date) };
    View::series(&daily_series(&session.shifts, &window.days(), session.now));
    Ok(())
}
