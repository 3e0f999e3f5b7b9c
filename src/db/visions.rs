//! Database operations for long-term visions.

use crate::db::db::Db;
use crate::libs::pillar::Pillar;
use anyhow::Result;
use chrono::Datelike;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_VISION: &str = "INSERT INTO visions (title, pillar, description, target_year) VALUES (?1, ?2, ?3, ?4)";
const SELECT_VISIONS: &str = "SELECT id, title, pillar, description, target_year FROM visions ORDER BY target_year, id";
const SELECT_VISION: &str = "SELECT id, title, pillar, description, target_year FROM visions WHERE id = ?1";
const DELETE_VISION: &str = "DELETE FROM visions WHERE id = ?1";

/// A long-term vision attached to a pillar.
#[derive(Debug, Clone)]
pub struct Vision {
    pub id: i64,
    pub title: String,
    pub pillar: Pillar,
    pub description: String,
    pub target_year: Option<i32>,
}

impl Vision {
    /// Years remaining until the target, negative when overdue.
    pub fn years_left(&self, today: chrono::NaiveDate) -> Option<i32> {
        self.target_year.map(|year| year - today.year())
    }
}

pub struct Visions {
    conn: Connection,
}

impl Visions {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Visions { conn: db.conn })
    }

    pub fn insert(&mut self, title: &str, pillar: Pillar, description: &str, target_year: Option<i32>) -> Result<i64> {
        self.conn.execute(INSERT_VISION, params![title, pillar.to_string(), description, target_year])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list(&mut self) -> Result<Vec<Vision>> {
        let mut stmt = self.conn.prepare(SELECT_VISIONS)?;
        let vision_iter = stmt.query_map([], map_vision_row)?;

        let mut visions = Vec::new();
        for vision in vision_iter {
            visions.push(vision?);
        }
        Ok(visions)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Vision>> {
        let vision = self.conn.query_row(SELECT_VISION, params![id], map_vision_row).optional()?;
        Ok(vision)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_VISION, params![id])?)
    }
}

fn map_vision_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Vision> {
    let pillar: String = row.get(2)?;

    Ok(Vision {
        id: row.get(0)?,
        title: row.get(1)?,
        pillar: pillar.parse().unwrap(),
        description: row.get(3)?,
        target_year: row.get(4)?,
    })
}
