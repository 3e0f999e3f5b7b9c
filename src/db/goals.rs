//! Database operations for daily goals.
//!
//! Goals are dated, pillar-tagged items with a completion flag. Completing
//! a goal stamps `completed_at`; reopening clears it. The streak counter
//! is derived from *full days*: dates on which at least one goal existed
//! and every goal was completed.

use crate::db::db::Db;
use crate::libs::pillar::Pillar;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;

const INSERT_GOAL: &str = "INSERT INTO goals (title, pillar, date) VALUES (?1, ?2, ?3)";
const SELECT_DAILY_GOALS: &str = "SELECT id, title, pillar, date, completed, completed_at FROM goals WHERE date = ?1 ORDER BY id";
const SELECT_RANGE_GOALS: &str = "SELECT id, title, pillar, date, completed, completed_at FROM goals WHERE date BETWEEN ?1 AND ?2 ORDER BY date, id";
const SELECT_GOAL: &str = "SELECT id, title, pillar, date, completed, completed_at FROM goals WHERE id = ?1";
const COMPLETE_GOAL: &str = "UPDATE goals SET completed = 1, completed_at = datetime(CURRENT_TIMESTAMP, 'localtime') WHERE id = ?1";
const REOPEN_GOAL: &str = "UPDATE goals SET completed = 0, completed_at = NULL WHERE id = ?1";
const DELETE_GOAL: &str = "DELETE FROM goals WHERE id = ?1";

/// Dates on which every goal was completed, up to and including a cutoff.
const SELECT_FULL_DAYS: &str = "SELECT date FROM goals WHERE date <= ?1 GROUP BY date HAVING COUNT(*) = SUM(completed)";

/// A single daily goal.
#[derive(Debug, Clone)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub pillar: Pillar,
    pub date: NaiveDate,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
}

pub struct Goals {
    conn: Connection,
}

impl Goals {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Goals { conn: db.conn })
    }

    pub fn insert(&mut self, title: &str, pillar: Pillar, date: NaiveDate) -> Result<i64> {
        self.conn
            .execute(INSERT_GOAL, params![title, pillar.to_string(), date.format("%Y-%m-%d").to_string()])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_date(&mut self, date: NaiveDate) -> Result<Vec<Goal>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare(SELECT_DAILY_GOALS)?;
        let goal_iter = stmt.query_map([&date_str], map_goal_row)?;

        let mut goals = Vec::new();
        for goal in goal_iter {
            goals.push(goal?);
        }
        Ok(goals)
    }

    pub fn fetch_range(&mut self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Goal>> {
        let mut stmt = self.conn.prepare(SELECT_RANGE_GOALS)?;
        let goal_iter = stmt.query_map([&from.format("%Y-%m-%d").to_string(), &to.format("%Y-%m-%d").to_string()], map_goal_row)?;

        let mut goals = Vec::new();
        for goal in goal_iter {
            goals.push(goal?);
        }
        Ok(goals)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Goal>> {
        let goal = self.conn.query_row(SELECT_GOAL, params![id], map_goal_row).optional()?;
        Ok(goal)
    }

    /// Marks a goal as completed, returning the number of affected rows.
    pub fn complete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(COMPLETE_GOAL, params![id])?)
    }

    /// Clears the completion flag and timestamp.
    pub fn reopen(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(REOPEN_GOAL, params![id])?)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_GOAL, params![id])?)
    }

    /// The set of dates, up to `through`, on which every goal was
    /// completed. Input to the streak calculation.
    pub fn full_days(&mut self, through: NaiveDate) -> Result<HashSet<NaiveDate>> {
        let through_str = through.format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare(SELECT_FULL_DAYS)?;
        let date_iter = stmt.query_map([&through_str], |row| row.get::<_, String>(0))?;

        let mut days = HashSet::new();
        for date in date_iter {
            days.insert(NaiveDate::parse_from_str(&date?, "%Y-%m-%d").unwrap());
        }
        Ok(days)
    }
}

fn map_goal_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Goal> {
    let pillar: String = row.get(2)?;
    let date_str: String = row.get(3)?;
    let completed_at: Option<String> = row.get(5)?;

    Ok(Goal {
        id: row.get(0)?,
        title: row.get(1)?,
        pillar: pillar.parse().unwrap(),
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap(),
        completed: row.get::<_, i64>(4)? != 0,
        completed_at: completed_at.map(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").unwrap()),
    })
}
