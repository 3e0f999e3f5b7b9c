//! Show the active timer, optionally as a live ticking stopwatch.
//!
//! `--follow` keeps the process (and with it the engine's one-second tick)
//! alive and redraws the elapsed time in place. Leaving with Ctrl+C is
//! safe: the engine persists its state on every tick.

use crate::commands::timer_engine;
use crate::libs::formatter::format_clock;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::time::Duration;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Keep running and redraw the stopwatch every second
    #[arg(long, short)]
    follow: bool,
}

pub async fn cmd(args: StatusArgs) -> Result<()> {
    let engine = timer_engine()?;

    let Some(timer) = engine.snapshot() else {
        msg_info!(Message::NoActiveTimer);
        return Ok(());
    };

    if timer.is_running {
        msg_print!(Message::TimerStatusRunning(timer.activity.clone()));
    } else {
        msg_print!(Message::TimerStatusPaused(timer.activity.clone()));
    }

    if !args.follow {
        println!("⏱ {}", format_clock(timer.elapsed_seconds));
        return Ok(());
    }

    msg_print!(Message::StatusFollowHint);
    loop {
        let Some(timer) = engine.snapshot() else { break };
        print!("\r⏱ {}  ", format_clock(timer.elapsed_seconds));
        io::stdout().flush()?;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Ok(())
}
