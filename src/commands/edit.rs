use super::Session;
use crate::{
    libs::{lifecycle, lifecycle::ShiftPatch, messages::Message},
    msg_error_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Shift id or unique id prefix
    id: String,

    /// New start time (YYYY-MM-DD HH:MM)
    #[arg(long, short)]
    start: Option<String>,

    /// New end time (YYYY-MM-DD HH:MM)
    #[arg(long, short)]
    end: Option<String>,

    /// New pause in minutes
    #[arg(long, short)]
    pause: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let patch = ShiftPatch::from_input(args.start.as_deref(), args.end.as_deref(), args.pause.as_deref())?;
    if patch.is_empty() {
        msg_warning!(Message::NothingToEdit);
        return Ok(());
    }

    let mut session = Session::open()?;
    let id = session.resolve_id(&args.id)?;

    let next = lifecycle::edit_by_id(&session.shifts, &id, &patch).map_err(|e| msg_error_anyhow!(Message::ShiftRejected(e.to_string())))?;
    session.commit(next)?;

    msg_success!(Message::ShiftUpdated);
    Ok(())
}
