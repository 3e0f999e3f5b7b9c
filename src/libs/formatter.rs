//! Time formatting utilities for user-friendly display.
//!
//! Two formats are used throughout the application:
//!
//! - **Stopwatch format** (`format_clock`): what the live timer shows.
//!   `H:MM:SS` once a full hour has elapsed, `M:SS` before that, with the
//!   trailing components always zero-padded to two digits.
//! - **Duration format** (`format_duration`): the `HH:MM` form used in
//!   tables, insights, and exports. Negative durations clamp to `00:00`.
//!
//! ## Examples
//!
//! ```rust
//! use pillars::libs::formatter::{format_clock, format_duration};
//! use chrono::Duration;
//!
//! assert_eq!(format_clock(65), "1:05");
//! assert_eq!(format_clock(3661), "1:01:01");
//! assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
//! ```

use chrono::Duration;

/// Formats a second count as a live stopwatch reading.
///
/// Returns `H:MM:SS` when `total_seconds >= 3600`, otherwise `M:SS`.
/// The minutes component is zero-padded only when paired with hours;
/// the seconds component is always two digits.
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Formats a chrono::Duration into a standardized "HH:MM" string.
///
/// Seconds are dropped. Negative values are treated as zero so table
/// rendering never shows a minus sign.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}
