#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pillars::db::goals::Goals;
    use pillars::libs::pillar::Pillar;
    use pillars::libs::streak::current_streak;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context pointing the application data directory at a temp dir.
    struct GoalsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for GoalsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            GoalsTestContext { _temp_dir: temp_dir }
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test_context(GoalsTestContext)]
    #[test]
    fn test_goal_lifecycle_and_streak(_ctx: &mut GoalsTestContext) {
        let mut goals = Goals::new().unwrap();

        let monday = day("2026-08-03");
        let tuesday = day("2026-08-04");
        let wednesday = day("2026-08-05");

        // Two goals on Monday, one each on Tuesday and Wednesday
        let run = goals.insert("Morning run", Pillar::Health, monday).unwrap();
        let read = goals.insert("Read a chapter", Pillar::Academics, monday).unwrap();
        let practice = goals.insert("Practice guitar", Pillar::Passions, tuesday).unwrap();
        let call = goals.insert("Call parents", Pillar::Relationship, wednesday).unwrap();

        let monday_goals = goals.fetch_date(monday).unwrap();
        assert_eq!(monday_goals.len(), 2);
        assert!(monday_goals.iter().all(|g| !g.completed));

        // Completing stamps completed_at, reopening clears it
        goals.complete(run).unwrap();
        let fetched = goals.get(run).unwrap().unwrap();
        assert!(fetched.completed);
        assert!(fetched.completed_at.is_some());

        goals.reopen(run).unwrap();
        let fetched = goals.get(run).unwrap().unwrap();
        assert!(!fetched.completed);
        assert!(fetched.completed_at.is_none());

        // Monday becomes full only once both goals are done
        goals.complete(run).unwrap();
        assert!(!goals.full_days(wednesday).unwrap().contains(&monday));
        goals.complete(read).unwrap();
        assert!(goals.full_days(wednesday).unwrap().contains(&monday));

        goals.complete(practice).unwrap();
        goals.complete(call).unwrap();

        let full = goals.full_days(wednesday).unwrap();
        assert_eq!(full.len(), 3);
        assert_eq!(current_streak(&full, wednesday), 3);

        // Reopening Wednesday's goal drops today from the streak but keeps
        // the run ending yesterday
        goals.reopen(call).unwrap();
        let full = goals.full_days(wednesday).unwrap();
        assert_eq!(current_streak(&full, wednesday), 2);

        // Range fetch and deletion
        assert_eq!(goals.fetch_range(monday, wednesday).unwrap().len(), 4);
        assert_eq!(goals.delete(call).unwrap(), 1);
        assert_eq!(goals.delete(call).unwrap(), 0, "deleting a missing goal affects no rows");
        assert!(goals.get(call).unwrap().is_none());
    }
}
