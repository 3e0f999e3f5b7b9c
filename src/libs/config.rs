//! Configuration management for the pillars application.
//!
//! Settings live in a JSON file in the platform application data directory
//! and are edited either by hand or through the interactive `init` wizard.
//! Each module is optional: an unconfigured module is simply absent from
//! the file.
//!
//! - **Profile**: display name shown in insights headers
//! - **Server**: base URL of the remote activity log service used by `push`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// User profile settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProfileConfig {
    /// Display name used in greeting and insights headers.
    pub name: String,
}

/// Remote activity log service connection settings.
///
/// The authentication token is not stored here; it lives in encrypted
/// secret storage and is prompted for on first use.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the activity log API.
    ///
    /// Example: `https://api.example.com/tracker`
    pub api_url: String,
}

/// Main configuration container for the entire application.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem, returning defaults when no
    /// file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults, so re-running the wizard
    /// updates settings in place.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Profile", "Server"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for selection in selected {
            match modules[selection] {
                "Profile" => {
                    let default = config.profile.clone().unwrap_or(ProfileConfig { name: String::new() });
                    msg_print!(Message::ConfigModuleProfile);
                    config.profile = Some(ProfileConfig {
                        name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDisplayName.to_string())
                            .default(default.name)
                            .interact_text()?,
                    });
                }
                "Server" => {
                    let default = config.server.clone().unwrap_or(ServerConfig { api_url: String::new() });
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
