//! Database operations for finalized time-log records.
//!
//! Time logs are the durable outcome of stopped activity timers (and of
//! manually entered sessions). This module is the local system of record:
//! the timer engine writes through the [`LogStore`] implementation, and
//! the `logs`, `insights`, `export`, and `push` commands read from here.
//!
//! ## Features
//!
//! - **Creation**: Insert finalized records with pillar and duration
//! - **Daily & Range Queries**: Retrieve logs for a date or window
//! - **Aggregation**: Minutes per pillar for progress insights
//! - **Deletion**: Remove mis-recorded sessions

use crate::db::db::Db;
use crate::libs::log_store::{LogStore, NewTimeLog, TimeLog};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::sync::Arc;

const INSERT_LOG: &str = "INSERT INTO time_logs (activity, pillar, duration_minutes, start_time, end_time, notes)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

const SELECT_DAILY_LOGS: &str = "SELECT id, activity, pillar, duration_minutes, start_time, end_time, notes
    FROM time_logs WHERE date(start_time) = date(?1) ORDER BY start_time";

const SELECT_RANGE_LOGS: &str = "SELECT id, activity, pillar, duration_minutes, start_time, end_time, notes
    FROM time_logs WHERE date(start_time) BETWEEN date(?1) AND date(?2) ORDER BY start_time";

/// Sum of logged minutes per pillar inside a date window.
const SELECT_MINUTES_BY_PILLAR: &str = "SELECT pillar, SUM(duration_minutes) FROM time_logs
    WHERE date(start_time) BETWEEN date(?1) AND date(?2) GROUP BY pillar";

const DELETE_LOG: &str = "DELETE FROM time_logs WHERE id = ?1";

/// Database manager for time-log records.
///
/// The connection is wrapped in `Arc<Mutex<>>` so the same store can be
/// shared with the timer engine's finalization path while commands query
/// it.
pub struct TimeLogs {
    pub conn: Arc<Mutex<Connection>>,
}

impl TimeLogs {
    /// Opens the store, running any pending schema migrations.
    pub fn new() -> Result<TimeLogs> {
        let db_conn = Db::new()?.conn;

        Ok(TimeLogs {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    /// Inserts a finalized record and returns it with its assigned ID.
    pub fn insert(&self, record: &NewTimeLog) -> Result<TimeLog> {
        let conn_guard = self.conn.lock();
        conn_guard.execute(
            INSERT_LOG,
            params![
                record.activity,
                record.pillar.to_string(),
                record.duration_minutes,
                record.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
                record.end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
                record.notes,
            ],
        )?;
        let id = conn_guard.last_insert_rowid();

        Ok(TimeLog {
            id,
            activity: record.activity.clone(),
            pillar: record.pillar,
            duration_minutes: record.duration_minutes,
            start_time: record.start_time,
            end_time: record.end_time,
            notes: record.notes.clone(),
        })
    }

    /// Retrieves all logs whose session started on the given date.
    pub fn fetch_date(&self, date: NaiveDate) -> Result<Vec<TimeLog>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(SELECT_DAILY_LOGS)?;
        let log_iter = stmt.query_map([&date_str], map_log_row)?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }
        Ok(logs)
    }

    /// Retrieves all logs whose session started inside the window.
    pub fn fetch_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<TimeLog>> {
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(SELECT_RANGE_LOGS)?;
        let log_iter = stmt.query_map([&from.format("%Y-%m-%d").to_string(), &to.format("%Y-%m-%d").to_string()], map_log_row)?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }
        Ok(logs)
    }

    /// Total logged minutes per pillar inside the window.
    ///
    /// Pillars without any logged time are absent from the result.
    pub fn minutes_by_pillar(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<(crate::libs::pillar::Pillar, i64)>> {
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(SELECT_MINUTES_BY_PILLAR)?;
        let iter = stmt.query_map([&from.format("%Y-%m-%d").to_string(), &to.format("%Y-%m-%d").to_string()], |row| {
            let pillar: String = row.get(0)?;
            let minutes: i64 = row.get(1)?;
            Ok((pillar, minutes))
        })?;

        let mut totals = Vec::new();
        for entry in iter {
            let (pillar, minutes) = entry?;
            totals.push((pillar.parse().unwrap(), minutes));
        }
        Ok(totals)
    }

    /// Deletes a record by ID, returning the number of affected rows.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let conn_guard = self.conn.lock();
        let deleted = conn_guard.execute(DELETE_LOG, params![id])?;
        Ok(deleted)
    }
}

fn map_log_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TimeLog> {
    let pillar: String = row.get(2)?;
    let start_str: String = row.get(4)?;
    let end_str: String = row.get(5)?;

    Ok(TimeLog {
        id: row.get(0)?,
        activity: row.get(1)?,
        pillar: pillar.parse().unwrap(),
        duration_minutes: row.get(3)?,
        start_time: NaiveDateTime::parse_from_str(&start_str, "%Y-%m-%d %H:%M:%S").unwrap(),
        end_time: NaiveDateTime::parse_from_str(&end_str, "%Y-%m-%d %H:%M:%S").unwrap(),
        notes: row.get(6)?,
    })
}

#[async_trait]
impl LogStore for TimeLogs {
    async fn create(&self, record: NewTimeLog) -> Result<TimeLog> {
        self.insert(&record)
    }
}
