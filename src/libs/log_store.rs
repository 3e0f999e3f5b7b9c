//! The activity log store contract.
//!
//! A finalized timer session becomes a [`NewTimeLog`] record handed to a
//! [`LogStore`]. The timer engine only ever calls `create`; listing,
//! aggregation, and deletion are concerns of the concrete stores
//! (`db::time_logs::TimeLogs` locally, `api::logs::RemoteLogs` for the
//! configured remote service).

use crate::libs::pillar::Pillar;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A finalized time-log record ready for creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTimeLog {
    pub activity: String,
    pub pillar: Pillar,
    pub duration_minutes: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: String,
}

/// A stored time-log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLog {
    pub id: i64,
    pub activity: String,
    pub pillar: Pillar,
    pub duration_minutes: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: String,
}

/// Sink for finalized time-log records.
///
/// Failures are surfaced to the caller as advisory notifications; the
/// engine never retries a rejected record.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn create(&self, record: NewTimeLog) -> Result<TimeLog>;
}
