#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use pillars::db::time_logs::TimeLogs;
    use pillars::libs::log_store::{LogStore, NewTimeLog};
    use pillars::libs::pillar::Pillar;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    /// Test context pointing the application data directory at a temp dir.
    struct TimeLogsTestContext {
        _temp_dir: TempDir,
    }

    impl AsyncTestContext for TimeLogsTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TimeLogsTestContext { _temp_dir: temp_dir }
        }
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn record(activity: &str, pillar: Pillar, start: &str, end: &str, minutes: i64) -> NewTimeLog {
        NewTimeLog {
            activity: activity.to_string(),
            pillar,
            duration_minutes: minutes,
            start_time: at(start),
            end_time: at(end),
            notes: format!("Timer session for {}", activity),
        }
    }

    #[test_context(TimeLogsTestContext)]
    #[tokio::test]
    async fn test_time_log_store_round_trip(_ctx: &mut TimeLogsTestContext) {
        let logs = TimeLogs::new().unwrap();

        let monday = NaiveDate::parse_from_str("2026-08-03", "%Y-%m-%d").unwrap();
        let tuesday = NaiveDate::parse_from_str("2026-08-04", "%Y-%m-%d").unwrap();

        // Create through the engine-facing trait
        let created = logs
            .create(record("Read", Pillar::Academics, "2026-08-03 09:00:00", "2026-08-03 09:45:00", 45))
            .await
            .unwrap();
        assert!(created.id > 0);

        logs.create(record("Run", Pillar::Health, "2026-08-03 18:00:00", "2026-08-03 18:30:00", 30))
            .await
            .unwrap();
        logs.create(record("Guitar", Pillar::Passions, "2026-08-04 20:00:00", "2026-08-04 21:00:00", 60))
            .await
            .unwrap();

        // Daily fetch is ordered by start time and scoped to the date
        let monday_logs = logs.fetch_date(monday).unwrap();
        assert_eq!(monday_logs.len(), 2);
        assert_eq!(monday_logs[0].activity, "Read");
        assert_eq!(monday_logs[0].pillar, Pillar::Academics);
        assert_eq!(monday_logs[0].start_time, at("2026-08-03 09:00:00"));
        assert_eq!(monday_logs[1].activity, "Run");

        let all = logs.fetch_range(monday, tuesday).unwrap();
        assert_eq!(all.len(), 3);

        // Aggregation sums minutes per pillar inside the window
        let mut totals = logs.minutes_by_pillar(monday, tuesday).unwrap();
        totals.sort_by_key(|(_, m)| *m);
        assert_eq!(totals, vec![(Pillar::Health, 30), (Pillar::Academics, 45), (Pillar::Passions, 60)]);

        let monday_totals = logs.minutes_by_pillar(monday, monday).unwrap();
        assert_eq!(monday_totals.iter().map(|(_, m)| m).sum::<i64>(), 75);

        // Deletion
        assert_eq!(logs.delete(created.id).unwrap(), 1);
        assert_eq!(logs.delete(created.id).unwrap(), 0);
        assert_eq!(logs.fetch_date(monday).unwrap().len(), 1);
    }
}
