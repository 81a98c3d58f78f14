use super::{timestamp_or, Session};
use crate::{
    libs::{lifecycle, messages::Message},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Shift id or unique id prefix
    id: String,

    /// Start time (YYYY-MM-DD HH:MM), defaults to now
    #[arg(long)]
    at: Option<String>,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let mut session = Session::open()?;
    let id = session.resolve_id(&args.id)?;
    let at = timestamp_or(args.at.as_deref(), session.now)?;

    let next = lifecycle::start_by_id(&session.shifts, &id, at).map_err(|e| msg_error_anyhow!(Message::ShiftRejected(e.to_string())))?;
    session.commit(next)?;

    msg_success!(Message::ShiftStartedAt(at.format("%d.%m.%Y %H:%M").to_string()));
    Ok(())
}
