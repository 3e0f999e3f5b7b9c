//! The activity timer engine.
//!
//! Owns the lifecycle of at most one timed activity: start, pause, resume,
//! and stop, with a one-second tick advancing the elapsed count while
//! running. Every state change is written to the injected [`StateStore`]
//! slot, so a killed process resumes exactly where it left off. Stopping a
//! timer that ran for at least a full minute finalizes it into a time-log
//! record through the injected [`LogStore`].
//!
//! ## State machine
//!
//! ```text
//! Absent --start--> Running --pause--> Paused --resume--> Running
//! Running|Paused --stop--> Absent
//! ```
//!
//! Pause, resume, and stop without an active timer are safe no-ops.
//!
//! ## Tick lifecycle
//!
//! The tick is a spawned tokio task holding the shared timer cell. The
//! handle is an owned optional resource: start and resume abort any
//! existing handle before spawning a new one, and pause, stop, and drop
//! abort it. Engine commands take `&mut self`, so no command can
//! interleave with an in-flight stop.

use crate::libs::log_store::{LogStore, NewTimeLog};
use crate::libs::messages::Message;
use crate::libs::pillar::Pillar;
use crate::libs::state::{PersistedTimer, StateStore};
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{DateTime, Duration, Local};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// The single in-progress activity timer.
#[derive(Debug, Clone)]
pub struct ActiveTimer {
    /// Opaque identifier derived from the creation timestamp.
    pub id: String,
    /// Display label of the tracked activity.
    pub activity: String,
    /// Life pillar the activity belongs to.
    pub pillar: Pillar,
    /// When the timer was first started; never adjusted by pause/resume.
    pub start_time: DateTime<Local>,
    /// Whole seconds accumulated while running; frozen while paused.
    pub elapsed_seconds: u64,
    /// True while the tick advances the elapsed count.
    pub is_running: bool,
}

/// Observable engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Absent,
    Running,
    Paused,
}

/// What happened when the timer was stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// A time-log record was created for the session.
    Logged { activity: String, minutes: i64 },
    /// The session ran for less than a full minute; nothing was logged.
    TooShort,
    /// There was no active timer to stop.
    Idle,
}

struct Shared {
    timer: Mutex<Option<ActiveTimer>>,
    store: Box<dyn StateStore>,
}

/// The timer engine.
///
/// Construct one per process via [`TimerEngine::new`], which restores any
/// persisted session from the state slot before the first command runs.
pub struct TimerEngine {
    shared: Arc<Shared>,
    logs: Arc<dyn LogStore>,
    ticker: Option<JoinHandle<()>>,
}

impl TimerEngine {
    /// Creates an engine wired to a state slot and a log store, restoring
    /// any persisted timer.
    ///
    /// A restored running timer is fast-forwarded by the wall-clock time
    /// since its last snapshot and starts ticking again immediately; a
    /// restored paused timer stays frozen.
    pub fn new(store: Box<dyn StateStore>, logs: Arc<dyn LogStore>) -> Result<Self> {
        let restored = store.load()?.map(|slot| slot.into_timer(Local::now()));

        let mut engine = Self {
            shared: Arc::new(Shared {
                timer: Mutex::new(restored),
                store,
            }),
            logs,
            ticker: None,
        };

        let resume_tick = {
            let guard = engine.shared.timer.lock();
            match guard.as_ref() {
                Some(timer) if timer.is_running => {
                    // Re-stamp the slot so the next restore fast-forwards
                    // from this moment, not the previous one.
                    engine.shared.store.save(&PersistedTimer::snapshot(timer))?;
                    true
                }
                _ => false,
            }
        };
        if resume_tick {
            engine.spawn_ticker();
        }

        Ok(engine)
    }

    /// Starts tracking a new activity.
    ///
    /// Any previously active timer is replaced without being finalized: its
    /// accumulated time is discarded and no log record is created.
    pub fn start(&mut self, activity: &str, pillar: Pillar) -> Result<ActiveTimer> {
        let activity = activity.trim();
        if activity.is_empty() {
            msg_bail_anyhow!(Message::EmptyActivity);
        }

        self.halt_ticker();

        let now = Local::now();
        let timer = ActiveTimer {
            id: now.timestamp_millis().to_string(),
            activity: activity.to_string(),
            pillar,
            start_time: now,
            elapsed_seconds: 0,
            is_running: true,
        };

        *self.shared.timer.lock() = Some(timer.clone());
        self.shared.store.save(&PersistedTimer::snapshot(&timer))?;
        self.spawn_ticker();

        Ok(timer)
    }

    /// Freezes the elapsed count. Safe no-op without an active timer.
    ///
    /// Returns the state after the call, so callers can tell a real pause
    /// from the no-op.
    pub fn pause(&mut self) -> Result<TimerState> {
        self.halt_ticker();

        let snapshot = {
            let mut guard = self.shared.timer.lock();
            match guard.as_mut() {
                Some(timer) => {
                    timer.is_running = false;
                    Some(PersistedTimer::snapshot(timer))
                }
                None => None,
            }
        };

        match snapshot {
            Some(snapshot) => {
                self.shared.store.save(&snapshot)?;
                Ok(TimerState::Paused)
            }
            None => Ok(TimerState::Absent),
        }
    }

    /// Continues a paused timer. Safe no-op without an active timer.
    pub fn resume(&mut self) -> Result<TimerState> {
        let snapshot = {
            let mut guard = self.shared.timer.lock();
            match guard.as_mut() {
                Some(timer) => {
                    timer.is_running = true;
                    Some(PersistedTimer::snapshot(timer))
                }
                None => None,
            }
        };

        match snapshot {
            Some(snapshot) => {
                self.shared.store.save(&snapshot)?;
                self.spawn_ticker();
                Ok(TimerState::Running)
            }
            None => Ok(TimerState::Absent),
        }
    }

    /// Stops the active timer and finalizes it into a time-log record.
    ///
    /// Sessions shorter than a full minute are discarded. The timer and its
    /// state slot are cleared before the log store is called, so a store
    /// failure surfaces to the caller but never re-arms the timer: log
    /// creation is at-most-once, best-effort.
    pub async fn stop(&mut self) -> Result<StopOutcome> {
        self.halt_ticker();

        let taken = self.shared.timer.lock().take();
        let Some(timer) = taken else {
            return Ok(StopOutcome::Idle);
        };

        self.shared.store.clear()?;

        let minutes = (timer.elapsed_seconds / 60) as i64;
        if minutes == 0 {
            return Ok(StopOutcome::TooShort);
        }

        // Backdate the interval from the accumulated running time, so time
        // spent paused is excluded from the logged window.
        let end_time = Local::now().naive_local();
        let start_time = end_time - Duration::seconds(timer.elapsed_seconds as i64);

        let record = NewTimeLog {
            activity: timer.activity.clone(),
            pillar: timer.pillar,
            duration_minutes: minutes,
            start_time,
            end_time,
            notes: format!("Timer session for {}", timer.activity),
        };

        self.logs.create(record).await?;

        Ok(StopOutcome::Logged {
            activity: timer.activity,
            minutes,
        })
    }

    /// Current engine state.
    pub fn state(&self) -> TimerState {
        match self.shared.timer.lock().as_ref() {
            None => TimerState::Absent,
            Some(timer) if timer.is_running => TimerState::Running,
            Some(_) => TimerState::Paused,
        }
    }

    /// A copy of the active timer, if any.
    pub fn snapshot(&self) -> Option<ActiveTimer> {
        self.shared.timer.lock().clone()
    }

    fn spawn_ticker(&mut self) {
        self.halt_ticker();

        let shared = self.shared.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut tick = tokio::time::interval(std::time::Duration::from_secs(1));
            // The first interval tick completes immediately; the elapsed
            // count must only advance on whole-second boundaries.
            tick.tick().await;
            loop {
                tick.tick().await;
                let snapshot = {
                    let mut guard = shared.timer.lock();
                    match guard.as_mut() {
                        Some(timer) if timer.is_running => {
                            timer.elapsed_seconds += 1;
                            PersistedTimer::snapshot(timer)
                        }
                        _ => break,
                    }
                };
                let _ = shared.store.save(&snapshot);
            }
        }));
    }

    fn halt_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        self.halt_ticker();
    }
}
