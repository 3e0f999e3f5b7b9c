//! Stop the active timer and finalize the session.
//!
//! Sessions shorter than a minute are discarded. A log-store failure is
//! reported as an advisory message; the timer is already cleared at that
//! point and is not re-armed.

use crate::commands::timer_engine;
use crate::libs::messages::Message;
use crate::libs::timer::StopOutcome;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let mut engine = timer_engine()?;

    match engine.stop().await {
        Ok(StopOutcome::Logged { activity, minutes }) => msg_success!(Message::TimerStopped(minutes, activity)),
        Ok(StopOutcome::TooShort) => msg_info!(Message::TimerTooShort),
        Ok(StopOutcome::Idle) => msg_info!(Message::NoActiveTimer),
        Err(e) => msg_error!(Message::TimerStopFailed(e.to_string())),
    }
    Ok(())
}
