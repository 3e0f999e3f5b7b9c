//! Display implementation for pillars application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! in the terminal. All user-facing wording lives here, so the rest of the
//! code never formats display strings inline.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TIMER MESSAGES ===
            Message::TimerStarted(activity) => format!("Timer started. Tracking time for: {}", activity),
            Message::TimerPaused => "Timer paused. You can resume or stop it anytime".to_string(),
            Message::TimerResumed => "Timer resumed. Continuing to track your time".to_string(),
            Message::TimerStopped(minutes, activity) => format!("Timer stopped. Logged {} minutes for {}", minutes, activity),
            Message::TimerTooShort => "Timer stopped. Session was too short to log".to_string(),
            Message::TimerStopFailed(err) => format!("Timer stopped, but the session could not be logged: {}", err),
            Message::NoActiveTimer => "No active timer".to_string(),
            Message::EmptyActivity => "Activity name cannot be empty".to_string(),
            Message::TimerStatusRunning(activity) => format!("Tracking: {}", activity),
            Message::TimerStatusPaused(activity) => format!("Paused: {}", activity),
            Message::StatusFollowHint => "Press Ctrl+C to leave (the timer keeps its state)".to_string(),

            // === TIME LOG MESSAGES ===
            Message::LogsTitle(date) => format!("⏱ Time logs for {}", date),
            Message::NoLogsForDate(date) => format!("No time logs recorded for {}", date),
            Message::LogDeleted => "Time log deleted".to_string(),
            Message::LogNotFound(id) => format!("Time log with ID {} not found", id),

            // === GOAL MESSAGES ===
            Message::GoalCreated(title) => format!("Goal '{}' created", title),
            Message::GoalCompleted(title) => format!("Goal '{}' completed", title),
            Message::GoalReopened(title) => format!("Goal '{}' reopened", title),
            Message::GoalDeleted => "Goal deleted".to_string(),
            Message::GoalNotFound(id) => format!("Goal with ID {} not found", id),
            Message::GoalsTitle(date) => format!("🎯 Goals for {}", date),
            Message::NoGoalsForDate(date) => format!("No goals set for {}", date),

            // === VISION MESSAGES ===
            Message::VisionCreated(title) => format!("Vision '{}' created", title),
            Message::VisionDeleted => "Vision deleted".to_string(),
            Message::VisionNotFound(id) => format!("Vision with ID {} not found", id),
            Message::VisionsTitle => "🔭 Visions".to_string(),
            Message::NoVisions => "No visions recorded yet".to_string(),

            // === JOURNAL MESSAGES ===
            Message::JournalEntryCreated => "Journal entry saved".to_string(),
            Message::JournalTitle(range) => format!("📓 Journal for {}", range),
            Message::NoJournalEntries => "No journal entries for this period".to_string(),

            // === INSIGHTS MESSAGES ===
            Message::InsightsTitle(period, range) => format!("📊 {} insights ({})", period, range),
            Message::InsightsGreeting(name) => format!("Here is how you are doing, {}", name),
            Message::GoalsCompleted(done, total) => format!("🎯 Goals completed: {}/{}", done, total),
            Message::JournalCount(count) => format!("📓 Journal entries: {}", count),
            Message::StreakDays(days) => format!("🔥 Current streak: {} day(s)", days),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleProfile => "Profile configuration".to_string(),
            Message::ConfigModuleServer => "Activity log server configuration".to_string(),
            Message::PromptDisplayName => "Display name".to_string(),
            Message::PromptServerApiUrl => "Activity log API base URL".to_string(),
            Message::PromptApiToken => "Enter your activity log API token".to_string(),

            // === PUSH MESSAGES ===
            Message::PushNoServerConfigured => "No activity log server configured. Run 'pillars init' first".to_string(),
            Message::PushNothingToSend(date) => format!("No time logs to push for {}", date),
            Message::PushDone(count, date) => format!("Pushed {} time log(s) for {}", count, date),
            Message::PushFailed(err) => format!("Push failed: {}", err),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Data exported successfully to: {}", path),
            Message::ExportNothingToExport => "Nothing to export for the selected period".to_string(),

            // === GENERIC MESSAGES ===
            Message::InvalidDateFormat(input) => format!("Invalid date '{}'. Use YYYY-MM-DD or 'today'", input),
        };

        write!(f, "{}", text)
    }
}
