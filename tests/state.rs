#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use pillars::libs::pillar::Pillar;
    use pillars::libs::state::{FileStateStore, PersistedTimer, StateStore};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StateTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StateTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StateTestContext { _temp_dir: temp_dir }
        }
    }

    fn sample(is_running: bool) -> PersistedTimer {
        let now = Local::now();
        PersistedTimer {
            id: "1754300000000".to_string(),
            activity: "Read".to_string(),
            pillar: Pillar::Academics,
            start_time: now - Duration::minutes(10),
            elapsed_seconds: 300,
            is_running,
            saved_at: now,
        }
    }

    #[test_context(StateTestContext)]
    #[test]
    fn test_file_slot_round_trip(_ctx: &mut StateTestContext) {
        let store = FileStateStore::new().unwrap();

        assert!(store.load().unwrap().is_none(), "fresh slot is empty");

        let state = sample(true);
        store.save(&state).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, state);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing an already empty slot is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_persisted_shape_uses_camel_case_fields() {
        let value = serde_json::to_value(sample(true)).unwrap();

        for field in ["id", "activity", "pillar", "startTime", "elapsedSeconds", "isRunning", "savedAt"] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(value["pillar"], "Academics");
        assert_eq!(value["elapsedSeconds"], 300);
    }

    #[test]
    fn test_restore_semantics() {
        let now = Local::now();

        // A running slot saved 40 seconds ago fast-forwards
        let mut running = sample(true);
        running.saved_at = now - Duration::seconds(40);
        let restored = running.into_timer(now);
        assert_eq!(restored.elapsed_seconds, 340);
        assert!(restored.is_running);

        // A paused slot restores exactly as saved, however old
        let mut paused = sample(false);
        paused.saved_at = now - Duration::hours(12);
        let restored = paused.into_timer(now);
        assert_eq!(restored.elapsed_seconds, 300);
        assert!(!restored.is_running);

        // A slot stamped in the future never goes negative
        let mut skewed = sample(true);
        skewed.saved_at = now + Duration::seconds(30);
        let restored = skewed.into_timer(now);
        assert_eq!(restored.elapsed_seconds, 300);
    }
}
