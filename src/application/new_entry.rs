//! New entry use case

use crate::application::collect_input::{collect_input, CollectOptions, EntryArgs};
use crate::domain::{render_entry, DiaryEntry};
use crate::error::{DailyNoteError, Result};
use crate::infrastructure::{
    EntryRepository, FileOpener, FileSystemRepository, InputSource, WeatherSource,
};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

const OVERWRITE_PROMPT: &str = "File already exists. Do you want to overwrite it?";

/// What the user asked for on this run
#[derive(Debug, Clone, Default)]
pub struct NewEntryRequest {
    pub args: EntryArgs,
    pub quick: bool,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Quick entry: the document was rendered but not saved
    Printed(String),
    /// The entry was saved to `path`
    Written { path: PathBuf, overwritten: bool },
}

/// Service for creating today's entry
pub struct NewEntryService<'a> {
    repository: FileSystemRepository,
    input: &'a mut dyn InputSource,
    weather: &'a dyn WeatherSource,
    opener: &'a dyn FileOpener,
    track_energy: bool,
}

impl<'a> NewEntryService<'a> {
    pub fn new(
        repository: FileSystemRepository,
        input: &'a mut dyn InputSource,
        weather: &'a dyn WeatherSource,
        opener: &'a dyn FileOpener,
    ) -> Self {
        NewEntryService {
            repository,
            input,
            weather,
            opener,
            track_energy: true,
        }
    }

    /// Turn energy tracking on or off
    pub fn track_energy(mut self, track_energy: bool) -> Self {
        self.track_energy = track_energy;
        self
    }

    /// Collect, enrich, render, then save (or print) the entry for `today`.
    ///
    /// Nothing is written unless every earlier step succeeded. Declining the
    /// overwrite prompt opens the existing entry and returns `Cancelled`.
    pub fn execute(&mut self, request: NewEntryRequest, today: NaiveDate) -> Result<EntryOutcome> {
        // 1. Collect input
        let options = CollectOptions {
            quick: request.quick,
            track_energy: self.track_energy,
        };
        let input = collect_input(request.args, options, today, self.input)?;

        // 2. Fetch weather
        let weather = self.weather.fetch()?;

        // 3. Render
        let entry = DiaryEntry::new(input, weather, today);
        let document = render_entry(&entry);

        // 4. Quick entries are never saved
        if request.quick {
            return Ok(EntryOutcome::Printed(document));
        }

        // 5. Save, asking before replacing today's entry
        let path = self.repository.entry_path(today);
        let overwritten = if self.repository.entry_exists(today) {
            log::warn!("File {} already exists.", path.display());
            if !self.input.confirm(OVERWRITE_PROMPT)? {
                log::info!("Exiting without changes.");
                self.launch(&path);
                return Err(DailyNoteError::Cancelled);
            }
            log::info!("Overwriting existing diary entry: {}", path.display());
            true
        } else {
            log::info!("Creating new diary entry: {}", path.display());
            false
        };

        let path = self.repository.write_entry(today, &document)?;

        // 6. Open in viewer
        self.launch(&path);

        Ok(EntryOutcome::Written { path, overwritten })
    }

    fn launch(&self, path: &Path) {
        if let Err(e) = self.opener.open(path) {
            log::warn!("Could not open {}: {}", path.display(), e);
        }
    }
}
