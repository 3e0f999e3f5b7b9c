//! Add and browse journal entries.

use crate::commands::parse_date;
use crate::db::journals::Journals;
use crate::libs::messages::Message;
use crate::libs::pillar::Pillar;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Duration;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct JournalArgs {
    #[command(subcommand)]
    command: Option<JournalCommand>,
}

#[derive(Debug, Subcommand)]
enum JournalCommand {
    /// Write a journal entry
    Add {
        /// Entry text
        content: String,
        /// Life pillar the entry relates to
        #[arg(long, short, value_enum)]
        pillar: Pillar,
        /// Mood label, free-form
        #[arg(long, short)]
        mood: Option<String>,
        /// Entry date (YYYY-MM-DD or 'today')
        #[arg(long, short, default_value = "today")]
        date: String,
    },
    /// List the week of entries ending at a date
    List {
        /// End of the window (YYYY-MM-DD or 'today')
        #[arg(long, short, default_value = "today")]
        date: String,
    },
}

pub async fn cmd(args: JournalArgs) -> Result<()> {
    match args.command {
        Some(JournalCommand::Add { content, pillar, mood, date }) => {
            let mut journals_db = Journals::new()?;
            journals_db.insert(pillar, &content, mood.as_deref(), parse_date(&date)?)?;

            msg_success!(Message::JournalEntryCreated);
            Ok(())
        }
        Some(JournalCommand::List { date }) => handle_list(&date),
        None => handle_list("today"),
    }
}

fn handle_list(date: &str) -> Result<()> {
    let to = parse_date(date)?;
    let from = to - Duration::days(6);

    let mut journals_db = Journals::new()?;
    let entries = journals_db.fetch_range(from, to)?;

    if entries.is_empty() {
        msg_info!(Message::NoJournalEntries);
        return Ok(());
    }

    let range = format!("{} – {}", from.format("%b %-d"), to.format("%b %-d, %Y"));
    msg_print!(Message::JournalTitle(range), true);
    View::journal(&entries)?;

    Ok(())
}
