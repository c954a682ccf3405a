//! Diary entry records

use crate::domain::weather::WeatherSnapshot;
use chrono::NaiveDate;

/// Fields supplied by the user (or quick-entry defaults)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub title: String,
    pub mood: i64,
    /// `None` when energy tracking is turned off
    pub energy: Option<i64>,
    pub location_title: String,
}

/// A complete entry ready for rendering
#[derive(Debug, Clone)]
pub struct DiaryEntry {
    pub input: EntryInput,
    pub weather: WeatherSnapshot,
    pub date: NaiveDate,
    pub filename: String,
}

impl DiaryEntry {
    pub fn new(input: EntryInput, weather: WeatherSnapshot, date: NaiveDate) -> Self {
        DiaryEntry {
            input,
            weather,
            date,
            filename: filename_for_date(date),
        }
    }

    /// Coordinates as "lat,lon"
    pub fn location(&self) -> String {
        format!("{},{}", self.weather.latitude, self.weather.longitude)
    }
}

/// One file per day (YYYY-MM-DD.md)
pub fn filename_for_date(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> WeatherSnapshot {
        WeatherSnapshot {
            city: "Leeds".to_string(),
            latitude: "53.800".to_string(),
            longitude: "-1.550".to_string(),
            current_temp_c: "11".to_string(),
            current_condition: "Light rain".to_string(),
            hourly_forecast: "Cloudy".to_string(),
        }
    }

    #[test]
    fn test_filename_for_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(filename_for_date(date), "2025-01-07.md");
    }

    #[test]
    fn test_new_entry_sets_filename_and_location() {
        let input = EntryInput {
            title: "Walk".to_string(),
            mood: 4,
            energy: Some(2),
            location_title: "Park".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let entry = DiaryEntry::new(input, weather(), date);

        assert_eq!(entry.filename, "2025-03-14.md");
        assert_eq!(entry.location(), "53.800,-1.550");
    }
}
