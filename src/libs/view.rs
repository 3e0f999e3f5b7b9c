use crate::db::goals::Goal;
use crate::db::journals::JournalEntry;
use crate::db::visions::Vision;
use crate::libs::formatter::format_duration;
use crate::libs::log_store::TimeLog;
use crate::libs::pillar::Pillar;
use anyhow::Result;
use chrono::Duration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn logs(logs: &[TimeLog]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END", "ACTIVITY", "PILLAR", "DURATION"]);
        for log in logs {
            table.add_row(row![
                log.id,
                log.start_time.format("%H:%M"),
                log.end_time.format("%H:%M"),
                log.activity,
                log.pillar,
                format_duration(&Duration::minutes(log.duration_minutes))
            ]);
        }
        let total: i64 = logs.iter().map(|l| l.duration_minutes).sum();
        table.add_row(row!["", "", "", "", "TOTAL", format_duration(&Duration::minutes(total))]);
        table.printstd();

        Ok(())
    }

    pub fn goals(goals: &[Goal]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "PILLAR"]);
        for goal in goals {
            table.add_row(row![goal.id, if goal.completed { "✓" } else { "" }, goal.title, goal.pillar]);
        }
        table.printstd();

        Ok(())
    }

    pub fn visions(visions: &[Vision], today: chrono::NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PILLAR", "TARGET", "YEARS LEFT"]);
        for vision in visions {
            table.add_row(row![
                vision.id,
                vision.title,
                vision.pillar,
                vision.target_year.map_or_else(|| "-".to_string(), |y| y.to_string()),
                vision.years_left(today).map_or_else(|| "-".to_string(), |y| y.to_string())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn journal(entries: &[JournalEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "PILLAR", "MOOD", "ENTRY"]);
        for entry in entries {
            table.add_row(row![
                entry.entry_date.format("%Y-%m-%d"),
                entry.pillar,
                entry.mood.as_deref().unwrap_or("-"),
                entry.content
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Minutes per pillar with each pillar's share of the total. Pillars
    /// without logged time still get a row.
    pub fn pillar_minutes(totals: &[(Pillar, i64)]) -> Result<()> {
        let total: i64 = totals.iter().map(|(_, m)| m).sum();

        let mut table = Table::new();
        table.add_row(row!["PILLAR", "TIME", "SHARE"]);
        for pillar in Pillar::ALL {
            let minutes = totals.iter().find(|(p, _)| *p == pillar).map_or(0, |(_, m)| *m);
            let share = if total > 0 { format!("{:.0}%", minutes as f64 / total as f64 * 100.0) } else { "-".to_string() };
            table.add_row(row![pillar, format_duration(&Duration::minutes(minutes)), share]);
        }
        table.add_row(row!["TOTAL", format_duration(&Duration::minutes(total)), ""]);
        table.printstd();

        Ok(())
    }
}
