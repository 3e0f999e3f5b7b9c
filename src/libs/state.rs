//! Durable state slot for the in-progress activity timer.
//!
//! The timer engine persists its single active timer on every state change
//! so an interrupted process (crash, reboot, plain exit) can pick the
//! session back up. The slot is one JSON record in the application data
//! directory, removed entirely when no timer is active.
//!
//! Storage is injected into the engine as a capability (`StateStore`), so
//! tests can substitute a slot that lives somewhere else without touching
//! engine logic.

use crate::libs::data_storage::DataStorage;
use crate::libs::pillar::Pillar;
use crate::libs::timer::ActiveTimer;
use anyhow::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// File name of the timer state slot inside the application data directory.
pub const STATE_FILE_NAME: &str = "timer.json";

/// The on-disk shape of an in-progress timer.
///
/// `saved_at` records when the snapshot was written. On restore, a timer
/// that was running is fast-forwarded by the wall-clock time since
/// `saved_at`; a paused timer keeps its stored `elapsed_seconds` unchanged,
/// so pausing and then restarting the process does not silently advance
/// the clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTimer {
    pub id: String,
    pub activity: String,
    pub pillar: Pillar,
    pub start_time: DateTime<Local>,
    pub elapsed_seconds: u64,
    pub is_running: bool,
    pub saved_at: DateTime<Local>,
}

impl PersistedTimer {
    /// Snapshots a live timer for persistence, stamping `saved_at` with the
    /// current wall-clock time.
    pub fn snapshot(timer: &ActiveTimer) -> Self {
        Self {
            id: timer.id.clone(),
            activity: timer.activity.clone(),
            pillar: timer.pillar,
            start_time: timer.start_time,
            elapsed_seconds: timer.elapsed_seconds,
            is_running: timer.is_running,
            saved_at: Local::now(),
        }
    }

    /// Rebuilds the live timer from a persisted slot.
    ///
    /// A running timer is treated as having kept running while the process
    /// was down: the gap between `saved_at` and `now` is added to the
    /// elapsed count. A paused timer restores exactly as saved.
    pub fn into_timer(self, now: DateTime<Local>) -> ActiveTimer {
        let mut elapsed_seconds = self.elapsed_seconds;
        if self.is_running {
            elapsed_seconds += (now - self.saved_at).num_seconds().max(0) as u64;
        }

        ActiveTimer {
            id: self.id,
            activity: self.activity,
            pillar: self.pillar,
            start_time: self.start_time,
            elapsed_seconds,
            is_running: self.is_running,
        }
    }
}

/// Capability for loading and storing the single timer state slot.
pub trait StateStore: Send + Sync {
    fn load(&self) -> Result<Option<PersistedTimer>>;
    fn save(&self, state: &PersistedTimer) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// The production slot: `timer.json` in the application data directory.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        Ok(Self { path })
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<Option<PersistedTimer>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let state: PersistedTimer = serde_json::from_str(&raw)?;
        Ok(Some(state))
    }

    fn save(&self, state: &PersistedTimer) -> Result<()> {
        let raw = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
