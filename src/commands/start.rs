//! Start tracking a new activity.
//!
//! Starting while another timer is active replaces it: the previous
//! timer's accumulated time is discarded without a log record.

use crate::commands::timer_engine;
use crate::libs::messages::Message;
use crate::libs::pillar::Pillar;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Activity label to track
    #[arg(required = true)]
    activity: String,

    /// Life pillar the activity belongs to
    #[arg(long, short, value_enum)]
    pillar: Pillar,
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    let mut engine = timer_engine()?;
    let timer = engine.start(&args.activity, args.pillar)?;

    msg_success!(Message::TimerStarted(timer.activity));
    Ok(())
}
