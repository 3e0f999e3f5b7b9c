#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use pillars::libs::streak::current_streak;
    use std::collections::HashSet;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn days(list: &[&str]) -> HashSet<NaiveDate> {
        list.iter().map(|s| day(s)).collect()
    }

    #[test]
    fn test_no_full_days_means_no_streak() {
        assert_eq!(current_streak(&HashSet::new(), day("2026-08-05")), 0);
    }

    #[test]
    fn test_consecutive_full_days_ending_today() {
        let full = days(&["2026-08-03", "2026-08-04", "2026-08-05"]);
        assert_eq!(current_streak(&full, day("2026-08-05")), 3);
    }

    #[test]
    fn test_gap_resets_the_streak() {
        let full = days(&["2026-08-01", "2026-08-02", "2026-08-04", "2026-08-05"]);
        assert_eq!(current_streak(&full, day("2026-08-05")), 2);
    }

    #[test]
    fn test_in_progress_day_keeps_yesterdays_streak() {
        // Today has no full completion yet; the streak anchors on yesterday
        let full = days(&["2026-08-02", "2026-08-03", "2026-08-04"]);
        assert_eq!(current_streak(&full, day("2026-08-05")), 3);
    }

    #[test]
    fn test_streak_broken_two_days_ago() {
        let full = days(&["2026-08-01", "2026-08-02", "2026-08-03"]);
        assert_eq!(current_streak(&full, day("2026-08-05")), 0);
    }

    #[test]
    fn test_single_full_day_today() {
        let full = days(&["2026-08-05"]);
        assert_eq!(current_streak(&full, day("2026-08-05")), 1);
    }

    #[test]
    fn test_streak_spans_month_boundary() {
        let mut full = HashSet::new();
        let mut cursor = day("2026-07-27");
        while cursor <= day("2026-08-05") {
            full.insert(cursor);
            cursor = cursor + Duration::days(1);
        }
        assert_eq!(current_streak(&full, day("2026-08-05")), 10);
    }
}
