//! Aggregated progress across pillars.
//!
//! Sums logged minutes per pillar over a day, rolling week, or
//! month-to-date window, alongside goal completion, journal activity,
//! and the current daily-goal streak.

use crate::commands::parse_date;
use crate::db::goals::Goals;
use crate::db::journals::Journals;
use crate::db::time_logs::TimeLogs;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::streak::current_streak;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    fn label(&self) -> &'static str {
        match self {
            Period::Day => "Daily",
            Period::Week => "Weekly",
            Period::Month => "Monthly",
        }
    }

    /// Window covered by the period, ending at `date`.
    fn window(&self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Period::Day => (date, date),
            Period::Week => (date - Duration::days(6), date),
            Period::Month => (date.with_day(1).unwrap(), date),
        }
    }
}

#[derive(Debug, Args)]
pub struct InsightsArgs {
    /// Aggregation window
    #[arg(long, short, value_enum, default_value = "week")]
    period: Period,

    /// End of the window (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,
}

pub async fn cmd(args: InsightsArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let (from, to) = args.period.window(date);
    let range = format!("{} – {}", from.format("%b %-d"), to.format("%b %-d, %Y"));

    if let Some(profile) = Config::read()?.profile {
        msg_info!(Message::InsightsGreeting(profile.name));
    }
    msg_print!(Message::InsightsTitle(args.period.label().to_string(), range), true);

    let totals = TimeLogs::new()?.minutes_by_pillar(from, to)?;
    View::pillar_minutes(&totals)?;

    let mut goals_db = Goals::new()?;
    let goals = goals_db.fetch_range(from, to)?;
    let done = goals.iter().filter(|g| g.completed).count();
    msg_print!(Message::GoalsCompleted(done, goals.len()));

    let entries = Journals::new()?.count_range(from, to)?;
    msg_print!(Message::JournalCount(entries));

    let today = Local::now().date_naive();
    let streak = current_streak(&goals_db.full_days(today)?, today);
    msg_print!(Message::StreakDays(streak));

    Ok(())
}
