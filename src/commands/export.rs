use super::Session;
use crate::{
    libs::{messages::Message, shift::ShiftRecord},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::{fs::File, io::BufWriter, path::PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file
    #[arg(long, short, default_value = "shifts.json")]
    output: PathBuf,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let session = Session::open()?;
    let records: Vec<ShiftRecord> = session.shifts.iter().map(ShiftRecord::from).collect();

    let writer = BufWriter::new(File::create(&args.output)?);
    serde_json::to_writer_pretty(writer, &records)?;

    msg_success!(Message::ExportCompleted(records.len(), args.output.display().to_string()));
    Ok(())
}
