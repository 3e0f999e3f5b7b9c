//! # Pillars - Personal Life Pillar Tracker
//!
//! A command-line companion for tracking goals, visions, journal entries,
//! and timed activities across the five life pillars.
//!
//! ## Features
//!
//! - **Activity Timer**: Start, pause, resume, and stop a single tracked
//!   activity; survives restarts through a persisted state slot
//! - **Time Logs**: Finalized timer sessions stored per pillar with durations
//! - **Goals**: Daily goals with completion tracking and a streak counter
//! - **Visions & Journal**: Long-term visions and dated journal entries
//! - **Insights**: Minutes per pillar, goal completion, and streak summaries
//! - **Remote Push**: Submit finalized time logs to an external log service
//! - **Data Export**: Export logs and goals to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pillars::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
