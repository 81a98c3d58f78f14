/// Every user-facing message of the application.
///
/// The text for each variant lives in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === SHIFT MESSAGES ===
    ShiftPlanned(String),         // start
    ShiftRecorded(String),        // duration
    ShiftStartedAt(String),       // start
    ShiftFinished(String),        // duration
    ShiftUpdated,
    ShiftDeleted,
    ShiftNotFound(String),        // id
    ShiftIdAmbiguous(String),     // id prefix
    ShiftsAutoStarted(usize),     // count
    ShiftRejected(String),        // reason
    NoShiftsForWeek,
    NothingToEdit,

    // === HOME MESSAGES ===
    RunningShift(String, String), // since, elapsed
    NoRunningShift,
    NextShift(String),            // start
    NoUpcomingShift,
    TotalWorked(String),

    // === VIEW HEADERS ===
    WeekHeader(String, String),   // from, to
    StatsHeader(String),          // period
    CalendarHeader(String),       // month

    // === PROMPTS ===
    PromptUseCurrentEndTime(String),
    PromptEndTime,
    PromptHadPause,
    PromptPauseMinutes,
    PromptOwner,
    PromptTickInterval,
    PromptLiveInterval,
    PromptDeleteShift(String), // start

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleWatch,

    // === WATCH MESSAGES ===
    WatchStarted(u64),            // tick interval seconds
    WatchStopped,
    WatchReceivedCtrlC,
    WatchSignalFailed(String),
    WatchLoadFailed(String),
    WatchSaveFailed(String),
    LiveDuration(String),         // elapsed

    // === EXPORT MESSAGES ===
    ExportCompleted(usize, String), // count, path

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === GENERIC ===
    OperationCancelled,
}
