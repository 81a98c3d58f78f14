//! Configuration management for shiftlog.
//!
//! The configuration is a small JSON document stored next to the database in
//! the platform data directory (see [`DataStorage`]). Every section is
//! optional; missing sections fall back to defaults so the application runs
//! without any setup.
//!
//! ## Sections
//!
//! - **owner**: the owner id under which shifts are loaded and saved.
//! - **watch**: tick cadence for the `watch` command.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Shifts belong to {}", config.owner_id());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Owner id used when none is configured.
pub const DEFAULT_OWNER: &str = "local";

/// Tick cadence of the `watch` loop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WatchConfig {
    /// Seconds between ticks while no shift is running.
    ///
    /// Only planned shifts need checking then, so a slow cadence is enough.
    pub tick_interval: u64,

    /// Seconds between ticks while a shift is running, so the displayed live
    /// duration stays current.
    pub live_interval: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig {
            tick_interval: 60,
            live_interval: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Owner id for the persistence layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchConfig>,
}

impl Config {
    /// Reads the configuration from the data directory, or defaults when no
    /// file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn owner_id(&self) -> String {
        self.owner
            .as_deref()
            .map(str::trim)
            .filter(|owner| !owner.is_empty())
            .unwrap_or(DEFAULT_OWNER)
            .to_string()
    }

    pub fn watch_or_default(&self) -> WatchConfig {
        self.watch.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let owner: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptOwner.to_string())
            .default(config.owner_id())
            .interact_text()?;
        config.owner = Some(owner);

        let default = config.watch_or_default();
        msg_print!(Message::ConfigModuleWatch);
        config.watch = Some(WatchConfig {
            tick_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTickInterval.to_string())
                .default(default.tick_interval)
                .interact_text()?,

            live_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLiveInterval.to_string())
                .default(default.live_interval)
                .interact_text()?,
        });

        Ok(config)
    }
}
