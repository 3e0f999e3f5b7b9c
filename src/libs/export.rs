//! Data export functionality for external analysis and backup.
//!
//! Exports time logs or goals for a given date in CSV, JSON, or Excel
//! format. File names default to a timestamped pattern in the current
//! directory but can be overridden with an explicit output path.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pillars::libs::export::{ExportData, ExportFormat, Exporter};
//! use chrono::Local;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(ExportData::Logs, Local::now().date_naive())?;
//! # anyhow::Ok(())
//! ```

use crate::db::goals::Goals;
use crate::db::time_logs::TimeLogs;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet tools.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with a formatted header row.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Which entity to export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Finalized time logs for the date.
    Logs,
    /// Goals for the date.
    Goals,
}

impl ExportData {
    fn label(&self) -> &'static str {
        match self {
            ExportData::Logs => "logs",
            ExportData::Goals => "goals",
        }
    }
}

/// Flat time-log row shared by all output formats.
#[derive(Debug, Serialize)]
struct LogRow {
    id: i64,
    activity: String,
    pillar: String,
    start_time: String,
    end_time: String,
    duration_minutes: i64,
    notes: String,
}

/// Flat goal row shared by all output formats.
#[derive(Debug, Serialize)]
struct GoalRow {
    id: i64,
    title: String,
    pillar: String,
    date: String,
    completed: bool,
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports the selected data for the date, returning the written path.
    ///
    /// Nothing is written when the selection is empty; the caller is told
    /// via an informational message instead.
    pub fn export(&self, data: ExportData, date: NaiveDate) -> Result<Option<PathBuf>> {
        let path = self.resolve_path(data);

        let written = match data {
            ExportData::Logs => {
                let logs = TimeLogs::new()?.fetch_date(date)?;
                if logs.is_empty() {
                    false
                } else {
                    let rows: Vec<LogRow> = logs
                        .iter()
                        .map(|log| LogRow {
                            id: log.id,
                            activity: log.activity.clone(),
                            pillar: log.pillar.to_string(),
                            start_time: log.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
                            end_time: log.end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
                            duration_minutes: log.duration_minutes,
                            notes: log.notes.clone(),
                        })
                        .collect();
                    self.write_rows(&path, &rows, &["id", "activity", "pillar", "start_time", "end_time", "duration_minutes", "notes"])?;
                    true
                }
            }
            ExportData::Goals => {
                let goals = Goals::new()?.fetch_date(date)?;
                if goals.is_empty() {
                    false
                } else {
                    let rows: Vec<GoalRow> = goals
                        .iter()
                        .map(|goal| GoalRow {
                            id: goal.id,
                            title: goal.title.clone(),
                            pillar: goal.pillar.to_string(),
                            date: goal.date.format("%Y-%m-%d").to_string(),
                            completed: goal.completed,
                        })
                        .collect();
                    self.write_rows(&path, &rows, &["id", "title", "pillar", "date", "completed"])?;
                    true
                }
            }
        };

        if !written {
            msg_info!(Message::ExportNothingToExport);
            return Ok(None);
        }

        msg_success!(Message::ExportSuccess(path.display().to_string()));
        Ok(Some(path))
    }

    /// Default file name: `pillars_<data>_<YYYYMMDD_HHMMSS>.<ext>` in the
    /// current directory, unless an explicit output path was given.
    fn resolve_path(&self, data: ExportData) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let stamp = Local::now().format("%Y%m%d_%H%M%S");
                PathBuf::from(format!("pillars_{}_{}.{}", data.label(), stamp, self.format.extension()))
            }
        }
    }

    fn write_rows<T: Serialize>(&self, path: &PathBuf, rows: &[T], headers: &[&str]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(path)?;
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let mut file = File::create(path)?;
                file.write_all(serde_json::to_string_pretty(rows)?.as_bytes())?;
            }
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();

                let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
                for (col, header) in headers.iter().enumerate() {
                    worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
                }

                // Rows are serialized to JSON objects so both entity types
                // share one writing path.
                for (index, row) in rows.iter().enumerate() {
                    let value = serde_json::to_value(row)?;
                    for (col, header) in headers.iter().enumerate() {
                        let cell = &value[*header];
                        let row_num = (index + 1) as u32;
                        match cell {
                            serde_json::Value::Number(n) => {
                                worksheet.write_number(row_num, col as u16, n.as_f64().unwrap_or(0.0))?;
                            }
                            serde_json::Value::Bool(b) => {
                                worksheet.write_string(row_num, col as u16, if *b { "yes" } else { "no" })?;
                            }
                            other => {
                                worksheet.write_string(row_num, col as u16, other.as_str().unwrap_or_default())?;
                            }
                        }
                    }
                }

                workbook.save(path)?;
            }
        }

        Ok(())
    }
}
