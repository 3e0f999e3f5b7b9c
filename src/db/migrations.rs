//! Database schema migration management and versioning.
//!
//! Migrations run automatically when the database is opened. Each applied
//! migration is recorded in a `migrations` table, and every migration runs
//! inside a transaction so a failure leaves the schema untouched.

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema migration.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Function that applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    fn new() -> Self {
        Self {
            migrations: vec![
                Migration {
                    version: 1,
                    name: "create_core_tables",
                    up: migrate_v1_core_tables,
                },
                Migration {
                    version: 2,
                    name: "index_time_logs_start",
                    up: migrate_v2_time_log_index,
                },
            ],
        }
    }

    fn migrate(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current = current_version(conn)?;
        for migration in self.migrations.iter().filter(|m| m.version > current) {
            msg_debug!(format!("Applying migration v{}: {}", migration.version, migration.name));

            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute("INSERT INTO migrations (version, name) VALUES (?1, ?2)", params![migration.version, migration.name])?;
            tx.commit()?;
        }

        Ok(())
    }
}

/// Opens the migrations table and applies everything still pending.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().migrate(conn)
}

/// The highest applied migration version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn migrate_v1_core_tables(tx: &Transaction) -> Result<()> {
    tx.execute(
        "CREATE TABLE IF NOT EXISTS time_logs (
            id INTEGER PRIMARY KEY,
            activity TEXT NOT NULL,
            pillar TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL,
            start_time TIMESTAMP NOT NULL,
            end_time TIMESTAMP NOT NULL,
            notes TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    tx.execute(
        "CREATE TABLE IF NOT EXISTS goals (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            pillar TEXT NOT NULL,
            date DATE NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            completed_at TIMESTAMP,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    tx.execute(
        "CREATE TABLE IF NOT EXISTS visions (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            pillar TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            target_year INTEGER,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    tx.execute(
        "CREATE TABLE IF NOT EXISTS journal_entries (
            id INTEGER PRIMARY KEY,
            pillar TEXT NOT NULL,
            content TEXT NOT NULL,
            mood TEXT,
            entry_date DATE NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    Ok(())
}

fn migrate_v2_time_log_index(tx: &Transaction) -> Result<()> {
    tx.execute("CREATE INDEX IF NOT EXISTS idx_time_logs_start ON time_logs (start_time)", [])?;
    tx.execute("CREATE INDEX IF NOT EXISTS idx_goals_date ON goals (date)", [])?;
    Ok(())
}
