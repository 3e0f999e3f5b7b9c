#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pillars::db::visions::Visions;
    use pillars::libs::pillar::Pillar;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct VisionsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for VisionsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            VisionsTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(VisionsTestContext)]
    #[test]
    fn test_vision_crud(_ctx: &mut VisionsTestContext) {
        let mut visions = Visions::new().unwrap();

        let dream = visions
            .insert("Run a marathon", Pillar::Health, "Finish a full 42k race", Some(2028))
            .unwrap();
        visions.insert("Write a novel", Pillar::Passions, "", None).unwrap();

        let listed = visions.list().unwrap();
        assert_eq!(listed.len(), 2);

        let fetched = visions.get(dream).unwrap().unwrap();
        assert_eq!(fetched.title, "Run a marathon");
        assert_eq!(fetched.pillar, Pillar::Health);
        assert_eq!(fetched.target_year, Some(2028));

        let today = NaiveDate::parse_from_str("2026-08-05", "%Y-%m-%d").unwrap();
        assert_eq!(fetched.years_left(today), Some(2));

        assert_eq!(visions.delete(dream).unwrap(), 1);
        assert_eq!(visions.delete(dream).unwrap(), 0);
        assert_eq!(visions.list().unwrap().len(), 1);
    }
}
