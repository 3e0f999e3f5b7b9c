//! Daily-goal streak calculation.
//!
//! A day is *full* when it had at least one goal and every goal set for it
//! was completed. The streak is the number of consecutive full days ending
//! today — or ending yesterday when today is not yet full, so an
//! in-progress day does not break a streak the user is still working on.

use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Counts the current streak of fully completed days.
///
/// `full_days` is the set of dates on which every goal was completed.
pub fn current_streak(full_days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut cursor = if full_days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while full_days.contains(&cursor) {
        streak += 1;
        cursor = cursor - Duration::days(1);
    }

    streak
}
