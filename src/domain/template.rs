//! Front-matter document rendering

use crate::domain::entry::DiaryEntry;
use crate::domain::scale::Scale;

const FRONT_MATTER_DELIMITER: &str = "---";

/// Render an entry as markdown with a front-matter header.
///
/// Keys are always emitted in the same order. A missing value (no energy, or
/// a rating without a label) keeps its key with an empty value. Every value
/// is written on one line, so free text cannot add keys or close the header.
pub fn render_entry(entry: &DiaryEntry) -> String {
    let mut result = String::new();

    result.push_str(FRONT_MATTER_DELIMITER);
    result.push('\n');
    for (key, value) in front_matter_fields(entry) {
        result.push_str(&format!("{}: {}\n", key, single_line(&value)));
    }
    result.push_str(FRONT_MATTER_DELIMITER);
    result.push('\n');

    result.push_str(&format!("\n# {}\n\n", single_line(&entry.input.title)));

    result
}

/// Join the lines of a value with single spaces
fn single_line(value: &str) -> String {
    value
        .split(|c| c == '\r' || c == '\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn front_matter_fields(entry: &DiaryEntry) -> [(&'static str, String); 14] {
    let input = &entry.input;
    let weather = &entry.weather;

    let energy = input.energy.map(|e| e.to_string()).unwrap_or_default();
    let energy_desc = input
        .energy
        .and_then(|e| Scale::Energy.label(e))
        .unwrap_or_default();

    [
        ("title", input.title.clone()),
        ("date", entry.date.format("%Y-%m-%d").to_string()),
        ("tags", "[]".to_string()),
        ("mood", input.mood.to_string()),
        (
            "mood_desc",
            Scale::Mood.label(input.mood).unwrap_or_default().to_string(),
        ),
        ("energy", energy),
        ("energy_desc", energy_desc.to_string()),
        ("location", entry.location()),
        ("location_title", input.location_title.clone()),
        ("city", weather.city.clone()),
        ("weather", weather.current_condition.clone()),
        ("temp_c", weather.current_temp_c.clone()),
        ("forecast", weather.hourly_forecast.clone()),
        ("filename", entry.filename.clone()),
    ]
}
