//! Collect entry fields from arguments, prompts or quick-entry defaults

use crate::domain::{EntryInput, Scale};
use crate::error::Result;
use crate::infrastructure::InputSource;
use chrono::NaiveDate;

const QUICK_MOOD: i64 = 3;
const QUICK_ENERGY: i64 = 3;
const QUICK_LOCATION_TITLE: &str = "Somewhere";

/// Values given on the command line; `None` means "ask"
#[derive(Debug, Clone, Default)]
pub struct EntryArgs {
    pub title: Option<String>,
    pub mood: Option<String>,
    pub energy: Option<String>,
    pub location_title: Option<String>,
}

/// How missing fields are filled in
#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    pub quick: bool,
    pub track_energy: bool,
}

/// Build an `EntryInput`. Supplied values always win; the rest come from
/// quick defaults or from `source`.
pub fn collect_input(
    args: EntryArgs,
    options: CollectOptions,
    today: NaiveDate,
    source: &mut dyn InputSource,
) -> Result<EntryInput> {
    if options.quick {
        log::debug!("Quick entry mode enabled. Skipping prompts.");
    } else {
        log::debug!("Quick entry mode not enabled. Prompts will be used.");
    }

    let title = match args.title {
        Some(title) => title,
        None if options.quick => format!("Quick Entry - {}", today.format("%Y-%m-%d")),
        None => source.text("Title of the diary entry")?,
    };

    let mood = rating(Scale::Mood, args.mood, QUICK_MOOD, options.quick, source)?;

    let energy = if options.track_energy {
        Some(rating(
            Scale::Energy,
            args.energy,
            QUICK_ENERGY,
            options.quick,
            source,
        )?)
    } else {
        None
    };

    let location_title = match args.location_title {
        Some(location_title) => location_title,
        None if options.quick => QUICK_LOCATION_TITLE.to_string(),
        None => source.text("Location Title")?,
    };

    Ok(EntryInput {
        title,
        mood,
        energy,
        location_title,
    })
}

fn rating(
    scale: Scale,
    supplied: Option<String>,
    quick_default: i64,
    quick: bool,
    source: &mut dyn InputSource,
) -> Result<i64> {
    match supplied {
        Some(raw) => scale.parse(&raw),
        None if quick => Ok(quick_default),
        None => {
            let answer = source.text(&scale.prompt())?;
            scale.parse(&answer)
        }
    }
}
