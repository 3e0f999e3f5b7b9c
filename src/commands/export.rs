//! Export time logs or goals to CSV, JSON, or Excel.

use crate::commands::parse_date;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(long, value_enum, default_value = "logs")]
    data: ExportData,

    /// Output format
    #[arg(long, short, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path (defaults to a timestamped name)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Date to export (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let date = parse_date(&args.date)?;

    Exporter::new(args.format, args.output).export(args.data, date)?;

    Ok(())
}
