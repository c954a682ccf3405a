//! Error types for daily-note

use thiserror::Error;

/// Main error type for the daily-note application
#[derive(Debug, Error)]
pub enum DailyNoteError {
    #[error("Invalid input: {0}")]
    InputParse(String),

    #[error("Weather fetch failed: {0}")]
    WeatherFetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The user declined to overwrite today's entry
    #[error("Aborted.")]
    Cancelled,
}

impl DailyNoteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DailyNoteError::InputParse(_) => 2,
            DailyNoteError::WeatherFetch(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DailyNoteError::InputParse(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Mood and energy take a number from 1 to 5 (e.g., 4)\n\
                    • Labels work too: miserable, sad, okay, happy, joyful\n\
                    • Energy labels: exhausted, tired, okay, active, buzzing\n\n\
                    Example:\n\
                    daily-note \"Long walk\" 4 3 \"Home\"",
                    msg
                )
            }
            DailyNoteError::WeatherFetch(msg) => {
                format!(
                    "Could not fetch weather: {}\n\n\
                    No entry was written.\n\n\
                    Suggestions:\n\
                    • Check your network connection\n\
                    • wttr.in may be rate limiting, try again in a minute\n\
                    • Raise timeout_secs in .daily-note.toml\n\
                    • Point DAILY_NOTE_WEATHER_URL at another wttr.in mirror",
                    msg
                )
            }
            DailyNoteError::Config(msg) => {
                if msg.contains("Failed to parse") {
                    format!(
                        "{}\n\n\
                        Valid keys in .daily-note.toml:\n\
                        notes_dir, weather_url, timeout_secs, track_energy, opener\n\
                        Example: timeout_secs = 20",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DailyNoteError
pub type Result<T> = std::result::Result<T, DailyNoteError>;
