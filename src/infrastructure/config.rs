//! Configuration management

use crate::error::{DailyNoteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Config file looked up in the journal root
pub const CONFIG_FILE: &str = ".daily-note.toml";

pub const DEFAULT_NOTES_DIR: &str = "Daily_Notes";
pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in/?format=j1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub notes_dir: String,
    pub weather_url: String,
    pub timeout_secs: u64,
    pub track_energy: bool,
    pub opener: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notes_dir: DEFAULT_NOTES_DIR.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            track_energy: true,
            opener: None,
        }
    }
}

impl Config {
    /// Load config from .daily-note.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} in {}, using defaults", CONFIG_FILE, path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(DailyNoteError::Io(e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            DailyNoteError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
        })?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.notes_dir.trim().is_empty() {
            return Err(DailyNoteError::Config(
                "notes_dir must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(DailyNoteError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the weather endpoint, checking the environment first
    pub fn get_weather_url(&self) -> String {
        std::env::var("DAILY_NOTE_WEATHER_URL").unwrap_or_else(|_| self.weather_url.clone())
    }

    /// Get the opener command override, checking the environment first
    pub fn get_opener(&self) -> Option<String> {
        std::env::var("DAILY_NOTE_OPENER")
            .ok()
            .or_else(|| self.opener.clone())
            .filter(|cmd| !cmd.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
