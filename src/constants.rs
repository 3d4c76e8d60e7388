//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Countdown defaults
pub mod countdown {
    /// Title shown when none is configured or the user leaves it blank
    pub const DEFAULT_TITLE: &str = "Countdown";

    /// Fallback target date (year, month, day) when none is persisted
    pub const FALLBACK_DATE: (i32, u32, u32) = (2025, 12, 31);

    /// Seconds between display recomputations
    pub const TICK_INTERVAL_SECS: u64 = 1;
}

/// Time decomposition constants
pub mod time {
    pub const SECONDS_PER_MINUTE: i64 = 60;
    pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
    pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
}

/// Date formatting patterns (chrono strftime syntax)
pub mod format {
    /// Calendar day as stored in the settings file
    pub const STORED_DATE: &str = "%Y-%m-%d";

    /// Human-readable target, e.g. "Wednesday, December 31, 2025 at 12:00 AM"
    pub const DISPLAY_TARGET: &str = "%A, %B %d, %Y at %I:%M %p";
}

/// Settings file location
pub mod settings {
    /// Settings file name, resolved against the working directory
    pub const FILENAME: &str = "settings.json";
}

/// Logging
pub mod logging {
    /// Environment variable holding the max log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";
}
