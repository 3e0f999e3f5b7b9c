//! Resume a paused timer. A no-op when nothing is being tracked.

use crate::commands::timer_engine;
use crate::libs::messages::Message;
use crate::libs::timer::TimerState;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let mut engine = timer_engine()?;

    match engine.resume()? {
        TimerState::Absent => msg_info!(Message::NoActiveTimer),
        _ => msg_success!(Message::TimerResumed),
    }
    Ok(())
}
