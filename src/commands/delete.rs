use super::Session;
use crate::{
    libs::{messages::Message, shift::ShiftGroup},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Shift id or unique id prefix
    id: String,

    /// Delete without confirmation
    #[arg(long, short)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut session = Session::open()?;
    let id = session.resolve_id(&args.id)?;

    if !args.yes {
        let label = session
            .shifts
            .find(&id)
            .map(|s| s.effective_start().format("%d.%m.%Y %H:%M").to_string())
            .unwrap_or_else(|| id.clone());
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDeleteShift(label).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    session.delete(&id)?;
    msg_success!(Message::ShiftDeleted);
    Ok(())
}
