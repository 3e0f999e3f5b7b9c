//! Submit a day's finalized time logs to the configured remote service.
//!
//! Submission is best-effort: the push stops at the first rejection and
//! reports it; already-submitted records are not rolled back.

use crate::api::RemoteLogs;
use crate::commands::parse_date;
use crate::db::time_logs::TimeLogs;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PushArgs {
    /// Date whose logs should be pushed (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,
}

pub async fn cmd(args: PushArgs) -> Result<()> {
    let Some(server) = Config::read()?.server else {
        msg_error!(Message::PushNoServerConfigured);
        return Ok(());
    };

    let date = parse_date(&args.date)?;
    let date_str = date.format("%B %-d, %Y").to_string();

    let logs = TimeLogs::new()?.fetch_date(date)?;
    if logs.is_empty() {
        msg_info!(Message::PushNothingToSend(date_str));
        return Ok(());
    }

    match RemoteLogs::new(&server).push_all(&logs).await {
        Ok(count) => msg_success!(Message::PushDone(count, date_str)),
        Err(e) => msg_error!(Message::PushFailed(e.to_string())),
    }

    Ok(())
}
