#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use pillars::db::time_logs::TimeLogs;
    use pillars::libs::export::{ExportData, ExportFormat, Exporter};
    use pillars::libs::log_store::NewTimeLog;
    use pillars::libs::pillar::Pillar;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { temp_dir }
        }
    }

    fn seed_logs(date: &str) {
        let logs = TimeLogs::new().unwrap();
        for (activity, pillar, start, end, minutes) in [
            ("Read", Pillar::Academics, "09:00:00", "09:45:00", 45),
            ("Run", Pillar::Health, "18:00:00", "18:30:00", 30),
        ] {
            logs.insert(&NewTimeLog {
                activity: activity.to_string(),
                pillar,
                duration_minutes: minutes,
                start_time: NaiveDateTime::parse_from_str(&format!("{} {}", date, start), "%Y-%m-%d %H:%M:%S").unwrap(),
                end_time: NaiveDateTime::parse_from_str(&format!("{} {}", date, end), "%Y-%m-%d %H:%M:%S").unwrap(),
                notes: format!("Timer session for {}", activity),
            })
            .unwrap();
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_logs_in_all_formats(ctx: &mut ExportTestContext) {
        let date = NaiveDate::parse_from_str("2026-08-03", "%Y-%m-%d").unwrap();
        seed_logs("2026-08-03");

        // CSV: header row plus one line per record
        let csv_path = ctx.temp_dir.path().join("logs.csv");
        let written = Exporter::new(ExportFormat::Csv, Some(csv_path.clone()))
            .export(ExportData::Logs, date)
            .unwrap();
        assert_eq!(written, Some(csv_path.clone()));

        let mut reader = csv::Reader::from_path(&csv_path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Read");
        assert_eq!(&rows[1][2], "Health");

        // JSON: an array of objects with the flat row fields
        let json_path = ctx.temp_dir.path().join("logs.json");
        Exporter::new(ExportFormat::Json, Some(json_path.clone()))
            .export(ExportData::Logs, date)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["activity"], "Read");
        assert_eq!(parsed[0]["duration_minutes"], 45);

        // Excel: the workbook is written to disk
        let xlsx_path = ctx.temp_dir.path().join("logs.xlsx");
        Exporter::new(ExportFormat::Excel, Some(xlsx_path.clone()))
            .export(ExportData::Logs, date)
            .unwrap();
        assert!(xlsx_path.exists());

        // A date with no records writes nothing
        let empty_path = ctx.temp_dir.path().join("empty.csv");
        let written = Exporter::new(ExportFormat::Csv, Some(empty_path.clone()))
            .export(ExportData::Logs, NaiveDate::parse_from_str("2026-01-01", "%Y-%m-%d").unwrap())
            .unwrap();
        assert_eq!(written, None);
        assert!(!empty_path.exists());
    }
}
