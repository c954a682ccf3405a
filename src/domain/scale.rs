//! Mood and energy scales with their fixed label tables

use crate::error::{DailyNoteError, Result};
use std::fmt;

const MOOD_LABELS: [(i64, &str); 5] = [
    (1, "Miserable"),
    (2, "Sad"),
    (3, "Okay"),
    (4, "Happy"),
    (5, "Joyful"),
];

const ENERGY_LABELS: [(i64, &str); 5] = [
    (1, "Exhausted"),
    (2, "Tired"),
    (3, "Okay"),
    (4, "Active"),
    (5, "Buzzing"),
];

/// A 1-5 self-rating scale recorded with each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Mood,
    Energy,
}

impl Scale {
    fn table(&self) -> &'static [(i64, &'static str)] {
        match self {
            Scale::Mood => &MOOD_LABELS,
            Scale::Energy => &ENERGY_LABELS,
        }
    }

    /// Human-readable label for a rating.
    /// Values outside the table have no label; they are still valid ratings.
    pub fn label(&self, value: i64) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(n, _)| *n == value)
            .map(|(_, label)| *label)
    }

    /// Parse a rating from a number or a label (case-insensitive).
    ///
    /// Numbers are accepted without range checks, so `9` parses to `9`.
    pub fn parse(&self, raw: &str) -> Result<i64> {
        let trimmed = raw.trim();

        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(value);
        }

        self.table()
            .iter()
            .find(|(_, label)| label.eq_ignore_ascii_case(trimmed))
            .map(|(n, _)| *n)
            .ok_or_else(|| {
                DailyNoteError::InputParse(format!(
                    "{} must be a number or one of {}, got '{}'",
                    self,
                    self.label_list(),
                    trimmed
                ))
            })
    }

    /// Prompt text listing the table, e.g. "Mood 1=Miserable 2=Sad ..."
    pub fn prompt(&self) -> String {
        let choices: Vec<String> = self
            .table()
            .iter()
            .map(|(n, label)| format!("{}={}", n, label))
            .collect();
        format!("{} {}", self, choices.join(" "))
    }

    fn label_list(&self) -> String {
        let labels: Vec<String> = self
            .table()
            .iter()
            .map(|(_, label)| label.to_lowercase())
            .collect();
        labels.join(", ")
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Mood => write!(f, "Mood"),
            Scale::Energy => write!(f, "Energy"),
        }
    }
}
