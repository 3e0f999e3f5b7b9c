#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER MESSAGES ===
    TimerStarted(String),         // activity
    TimerPaused,
    TimerResumed,
    TimerStopped(i64, String),    // minutes, activity
    TimerTooShort,
    TimerStopFailed(String),      // error
    NoActiveTimer,
    EmptyActivity,
    TimerStatusRunning(String),   // activity
    TimerStatusPaused(String),    // activity
    StatusFollowHint,

    // === TIME LOG MESSAGES ===
    LogsTitle(String), // date
    NoLogsForDate(String),
    LogDeleted,
    LogNotFound(i64),

    // === GOAL MESSAGES ===
    GoalCreated(String),
    GoalCompleted(String),
    GoalReopened(String),
    GoalDeleted,
    GoalNotFound(i64),
    GoalsTitle(String), // date
    NoGoalsForDate(String),

    // === VISION MESSAGES ===
    VisionCreated(String),
    VisionDeleted,
    VisionNotFound(i64),
    VisionsTitle,
    NoVisions,

    // === JOURNAL MESSAGES ===
    JournalEntryCreated,
    JournalTitle(String), // date range
    NoJournalEntries,

    // === INSIGHTS MESSAGES ===
    InsightsTitle(String, String), // period label, range
    InsightsGreeting(String),      // display name
    GoalsCompleted(usize, usize),  // done, total
    JournalCount(i64),
    StreakDays(u32),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    PromptSelectModules,
    ConfigModuleProfile,
    ConfigModuleServer,
    PromptDisplayName,
    PromptServerApiUrl,
    PromptApiToken,

    // === PUSH MESSAGES ===
    PushNoServerConfigured,
    PushNothingToSend(String),  // date
    PushDone(usize, String),    // count, date
    PushFailed(String),         // error

    // === EXPORT MESSAGES ===
    ExportSuccess(String), // path
    ExportNothingToExport,

    // === GENERIC MESSAGES ===
    InvalidDateFormat(String),
}
