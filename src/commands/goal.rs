//! Manage daily goals.
//!
//! Goals drive the streak counter: a day counts toward the streak only
//! when every goal set for it has been completed.

use crate::commands::parse_date;
use crate::db::goals::Goals;
use crate::libs::messages::Message;
use crate::libs::pillar::Pillar;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    command: Option<GoalCommand>,
}

#[derive(Debug, Subcommand)]
enum GoalCommand {
    /// Add a goal for a date
    Add {
        /// Goal title
        title: String,
        /// Life pillar the goal belongs to
        #[arg(long, short, value_enum)]
        pillar: Pillar,
        /// Target date (YYYY-MM-DD or 'today')
        #[arg(long, short, default_value = "today")]
        date: String,
    },
    /// List goals for a date
    List {
        /// Date to list (YYYY-MM-DD or 'today')
        #[arg(long, short, default_value = "today")]
        date: String,
    },
    /// Mark a goal as completed
    Done {
        /// Goal ID
        id: i64,
    },
    /// Clear a goal's completion flag
    Reopen {
        /// Goal ID
        id: i64,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: i64,
    },
}

pub async fn cmd(args: GoalArgs) -> Result<()> {
    match args.command {
        Some(GoalCommand::Add { title, pillar, date }) => handle_add(title, pillar, parse_date(&date)?),
        Some(GoalCommand::List { date }) => handle_list(parse_date(&date)?),
        Some(GoalCommand::Done { id }) => handle_done(id),
        Some(GoalCommand::Reopen { id }) => handle_reopen(id),
        Some(GoalCommand::Delete { id }) => handle_delete(id),
        None => handle_list(parse_date("today")?),
    }
}

fn handle_add(title: String, pillar: Pillar, date: NaiveDate) -> Result<()> {
    let mut goals_db = Goals::new()?;
    goals_db.insert(&title, pillar, date)?;

    msg_success!(Message::GoalCreated(title));
    Ok(())
}

fn handle_list(date: NaiveDate) -> Result<()> {
    let mut goals_db = Goals::new()?;
    let goals = goals_db.fetch_date(date)?;

    if goals.is_empty() {
        msg_info!(Message::NoGoalsForDate(date.format("%B %-d, %Y").to_string()));
        return Ok(());
    }

    msg_print!(Message::GoalsTitle(date.format("%B %-d, %Y").to_string()), true);
    View::goals(&goals)?;

    Ok(())
}

fn handle_done(id: i64) -> Result<()> {
    let mut goals_db = Goals::new()?;

    let Some(goal) = goals_db.get(id)? else {
        msg_error!(Message::GoalNotFound(id));
        return Ok(());
    };

    goals_db.complete(id)?;
    msg_success!(Message::GoalCompleted(goal.title));
    Ok(())
}

fn handle_reopen(id: i64) -> Result<()> {
    let mut goals_db = Goals::new()?;

    let Some(goal) = goals_db.get(id)? else {
        msg_error!(Message::GoalNotFound(id));
        return Ok(());
    };

    goals_db.reopen(id)?;
    msg_success!(Message::GoalReopened(goal.title));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut goals_db = Goals::new()?;

    if goals_db.delete(id)? == 0 {
        msg_error!(Message::GoalNotFound(id));
    } else {
        msg_success!(Message::GoalDeleted);
    }
    Ok(())
}
