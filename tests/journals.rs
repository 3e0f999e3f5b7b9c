#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pillars::db::journals::Journals;
    use pillars::libs::pillar::Pillar;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct JournalsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for JournalsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            JournalsTestContext { _temp_dir: temp_dir }
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test_context(JournalsTestContext)]
    #[test]
    fn test_journal_entries_round_trip(_ctx: &mut JournalsTestContext) {
        let mut journals = Journals::new().unwrap();

        journals
            .insert(Pillar::Health, "Felt great after the run", Some("energized"), day("2026-08-03"))
            .unwrap();
        journals.insert(Pillar::Career, "Long day at work", None, day("2026-08-04")).unwrap();
        journals
            .insert(Pillar::Relationship, "Dinner with family", Some("happy"), day("2026-08-10"))
            .unwrap();

        let week = journals.fetch_range(day("2026-08-03"), day("2026-08-09")).unwrap();
        assert_eq!(week.len(), 2);
        assert_eq!(week[0].content, "Felt great after the run");
        assert_eq!(week[0].mood.as_deref(), Some("energized"));
        assert_eq!(week[1].mood, None);

        assert_eq!(journals.count_range(day("2026-08-03"), day("2026-08-09")).unwrap(), 2);
        assert_eq!(journals.count_range(day("2026-08-01"), day("2026-08-31")).unwrap(), 3);
    }
}
