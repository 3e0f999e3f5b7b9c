//! Manage long-term visions.

use crate::db::visions::Visions;
use crate::libs::messages::Message;
use crate::libs::pillar::Pillar;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct VisionArgs {
    #[command(subcommand)]
    command: Option<VisionCommand>,
}

#[derive(Debug, Subcommand)]
enum VisionCommand {
    /// Add a vision
    Add {
        /// Vision title
        title: String,
        /// Life pillar the vision belongs to
        #[arg(long, short, value_enum)]
        pillar: Pillar,
        /// Longer description
        #[arg(long, default_value = "")]
        description: String,
        /// Year the vision should be realized by
        #[arg(long)]
        target_year: Option<i32>,
    },
    /// List all visions
    List,
    /// Delete a vision
    Delete {
        /// Vision ID
        id: i64,
    },
}

pub async fn cmd(args: VisionArgs) -> Result<()> {
    match args.command {
        Some(VisionCommand::Add {
            title,
            pillar,
            description,
            target_year,
        }) => handle_add(title, pillar, description, target_year),
        Some(VisionCommand::List) | None => handle_list(),
        Some(VisionCommand::Delete { id }) => handle_delete(id),
    }
}

fn handle_add(title: String, pillar: Pillar, description: String, target_year: Option<i32>) -> Result<()> {
    let mut visions_db = Visions::new()?;
    visions_db.insert(&title, pillar, &description, target_year)?;

    msg_success!(Message::VisionCreated(title));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut visions_db = Visions::new()?;
    let visions = visions_db.list()?;

    if visions.is_empty() {
        msg_info!(Message::NoVisions);
        return Ok(());
    }

    msg_print!(Message::VisionsTitle, true);
    View::visions(&visions, Local::now().date_naive())?;

    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut visions_db = Visions::new()?;

    if visions_db.delete(id)? == 0 {
        msg_error!(Message::VisionNotFound(id));
    } else {
        msg_success!(Message::VisionDeleted);
    }
    Ok(())
}
