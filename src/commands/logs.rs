//! Display and manage finalized time logs.

use crate::commands::parse_date;
use crate::db::time_logs::TimeLogs;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogsArgs {
    /// Date to fetch logs for (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,

    /// Delete the log with the given ID instead of listing
    #[arg(long)]
    delete: Option<i64>,
}

pub async fn cmd(args: LogsArgs) -> Result<()> {
    let logs_db = TimeLogs::new()?;

    if let Some(id) = args.delete {
        if logs_db.delete(id)? == 0 {
            msg_error!(Message::LogNotFound(id));
        } else {
            msg_success!(Message::LogDeleted);
        }
        return Ok(());
    }

    let date = parse_date(&args.date)?;
    let logs = logs_db.fetch_date(date)?;

    if logs.is_empty() {
        msg_info!(Message::NoLogsForDate(date.format("%B %-d, %Y").to_string()));
        return Ok(());
    }

    msg_print!(Message::LogsTitle(date.format("%B %-d, %Y").to_string()), true);
    View::logs(&logs)?;

    Ok(())
}
