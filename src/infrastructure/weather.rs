//! HTTP client for the wttr.in weather service

use crate::domain::WeatherSnapshot;
use crate::error::{DailyNoteError, Result};
use crate::infrastructure::Config;
use std::time::Duration;

/// Source of current weather for a new entry
pub trait WeatherSource {
    fn fetch(&self) -> Result<WeatherSnapshot>;
}

/// Blocking wttr.in client. The service resolves the location from the
/// caller's address, so no coordinates are sent.
pub struct WttrClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl WttrClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DailyNoteError::WeatherFetch(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(WttrClient { url, client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.get_weather_url(), config.timeout())
    }
}

impl WeatherSource for WttrClient {
    fn fetch(&self) -> Result<WeatherSnapshot> {
        log::debug!("Requesting weather from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    DailyNoteError::WeatherFetch(format!("Request to {} timed out", self.url))
                } else {
                    DailyNoteError::WeatherFetch(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DailyNoteError::WeatherFetch(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(DailyNoteError::WeatherFetch(format!(
                "HTTP {}: {}",
                status,
                body.trim()
            )));
        }

        WeatherSnapshot::from_wttr_json(&body)
    }
}
