#[cfg(test)]
mod tests {
    use pillars::libs::config::{Config, ProfileConfig, ServerConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_defaults_and_round_trip(_ctx: &mut ConfigTestContext) {
        // Missing file yields a default config rather than an error
        let config = Config::read().unwrap();
        assert!(config.profile.is_none());
        assert!(config.server.is_none());

        let mut config = Config::default();
        config.profile = Some(ProfileConfig { name: "Alex".to_string() });
        config.server = Some(ServerConfig {
            api_url: "https://api.example.com/tracker".to_string(),
        });
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.profile, Some(ProfileConfig { name: "Alex".to_string() }));
        assert_eq!(
            loaded.server,
            Some(ServerConfig {
                api_url: "https://api.example.com/tracker".to_string()
            })
        );
    }
}
