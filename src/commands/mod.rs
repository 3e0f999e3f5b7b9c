//! Command-line interface for the pillars application.
//!
//! Each subcommand lives in its own module with a `cmd` entry point; this
//! module owns argument parsing and dispatch.

pub mod export;
pub mod goal;
pub mod init;
pub mod insights;
pub mod journal;
pub mod logs;
pub mod pause;
pub mod push;
pub mod resume;
pub mod start;
pub mod status;
pub mod stop;
pub mod vision;

use crate::db::time_logs::TimeLogs;
use crate::libs::messages::Message;
use crate::libs::state::FileStateStore;
use crate::libs::timer::TimerEngine;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start tracking an activity")]
    Start(start::StartArgs),
    #[command(about = "Pause the active timer")]
    Pause,
    #[command(about = "Resume the paused timer")]
    Resume,
    #[command(about = "Stop the active timer and log the session")]
    Stop,
    #[command(about = "Show the active timer")]
    Status(status::StatusArgs),
    #[command(about = "Display time logs for a given date")]
    Logs(logs::LogsArgs),
    #[command(about = "Manage daily goals")]
    Goal(goal::GoalArgs),
    #[command(about = "Manage long-term visions")]
    Vision(vision::VisionArgs),
    #[command(about = "Add and browse journal entries")]
    Journal(journal::JournalArgs),
    #[command(about = "Aggregated progress across pillars")]
    Insights(insights::InsightsArgs),
    #[command(about = "Push a day's time logs to the configured server")]
    Push(push::PushArgs),
    #[command(about = "Export data to CSV, JSON, or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start(args) => start::cmd(args).await,
            Commands::Pause => pause::cmd().await,
            Commands::Resume => resume::cmd().await,
            Commands::Stop => stop::cmd().await,
            Commands::Status(args) => status::cmd(args).await,
            Commands::Logs(args) => logs::cmd(args).await,
            Commands::Goal(args) => goal::cmd(args).await,
            Commands::Vision(args) => vision::cmd(args).await,
            Commands::Journal(args) => journal::cmd(args).await,
            Commands::Insights(args) => insights::cmd(args).await,
            Commands::Push(args) => push::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Builds the timer engine wired to the production state slot and the
/// local time-log store, restoring any persisted session.
pub(crate) fn timer_engine() -> Result<TimerEngine> {
    let store = FileStateStore::new()?;
    let logs = Arc::new(TimeLogs::new()?);
    TimerEngine::new(Box::new(store), logs)
}

/// Parses `today` or an ISO `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(date_str.to_string())))
    }
}
