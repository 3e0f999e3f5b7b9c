//! Database layer for the pillars application.
//!
//! A complete local persistence layer built on SQLite: connection
//! management with versioned migrations, plus one module per entity
//! (time logs, goals, visions, journal entries).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pillars::db::goals::Goals;
//! use chrono::Local;
//!
//! let mut goals = Goals::new()?;
//! let today = Local::now().date_naive();
//! let open = goals.fetch_date(today)?;
//! # anyhow::Ok(())
//! ```

pub mod db;
pub mod goals;
pub mod journals;
pub mod migrations;
pub mod time_logs;
pub mod visions;
