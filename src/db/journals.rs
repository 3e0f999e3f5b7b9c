//! Database operations for journal entries.

use crate::db::db::Db;
use crate::libs::pillar::Pillar;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

const INSERT_ENTRY: &str = "INSERT INTO journal_entries (pillar, content, mood, entry_date) VALUES (?1, ?2, ?3, ?4)";
const SELECT_RANGE_ENTRIES: &str = "SELECT id, pillar, content, mood, entry_date FROM journal_entries
    WHERE entry_date BETWEEN ?1 AND ?2 ORDER BY entry_date, id";
const COUNT_RANGE_ENTRIES: &str = "SELECT COUNT(*) FROM journal_entries WHERE entry_date BETWEEN ?1 AND ?2";

/// A dated journal entry, optionally tagged with a mood.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub id: i64,
    pub pillar: Pillar,
    pub content: String,
    pub mood: Option<String>,
    pub entry_date: NaiveDate,
}

pub struct Journals {
    conn: Connection,
}

impl Journals {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Journals { conn: db.conn })
    }

    pub fn insert(&mut self, pillar: Pillar, content: &str, mood: Option<&str>, entry_date: NaiveDate) -> Result<i64> {
        self.conn
            .execute(INSERT_ENTRY, params![pillar.to_string(), content, mood, entry_date.format("%Y-%m-%d").to_string()])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_range(&mut self, from: NaiveDate, to: NaiveDate) -> Result<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(SELECT_RANGE_ENTRIES)?;
        let entry_iter = stmt.query_map([&from.format("%Y-%m-%d").to_string(), &to.format("%Y-%m-%d").to_string()], |row| {
            let pillar: String = row.get(1)?;
            let date_str: String = row.get(4)?;
            Ok(JournalEntry {
                id: row.get(0)?,
                pillar: pillar.parse().unwrap(),
                content: row.get(2)?,
                mood: row.get(3)?,
                entry_date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap(),
            })
        })?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }
        Ok(entries)
    }

    pub fn count_range(&mut self, from: NaiveDate, to: NaiveDate) -> Result<i64> {
        let count = self.conn.query_row(
            COUNT_RANGE_ENTRIES,
            [&from.format("%Y-%m-%d").to_string(), &to.format("%Y-%m-%d").to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
