//! Weather snapshot extracted from a wttr.in `format=j1` response

use crate::error::{DailyNoteError, Result};
use serde_json::Value;

/// Current weather at the caller's location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub latitude: String,
    pub longitude: String,
    pub current_temp_c: String,
    pub current_condition: String,
    pub hourly_forecast: String,
}

impl WeatherSnapshot {
    /// Parse the j1 JSON body returned by wttr.in
    pub fn from_wttr_json(body: &str) -> Result<Self> {
        let v: Value = serde_json::from_str(body).map_err(|e| {
            DailyNoteError::WeatherFetch(format!("Failed to parse response JSON: {}", e))
        })?;

        Ok(WeatherSnapshot {
            city: field(&v, "/nearest_area/0/areaName/0/value")?,
            latitude: field(&v, "/nearest_area/0/latitude")?,
            longitude: field(&v, "/nearest_area/0/longitude")?,
            current_temp_c: field(&v, "/current_condition/0/temp_C")?,
            current_condition: field(&v, "/current_condition/0/weatherDesc/0/value")?,
            hourly_forecast: field(&v, "/weather/0/hourly/0/weatherDesc/0/value")?,
        })
    }
}

/// wttr.in sends every scalar as a string, but tolerate bare numbers too
fn field(v: &Value, pointer: &str) -> Result<String> {
    match v.pointer(pointer) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(DailyNoteError::WeatherFetch(format!(
            "Unexpected value type at {}",
            pointer
        ))),
        None => Err(DailyNoteError::WeatherFetch(format!(
            "Response is missing {}",
            pointer
        ))),
    }
}
