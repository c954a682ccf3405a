//! File system repository for dated entries

use crate::domain::entry::filename_for_date;
use crate::error::{DailyNoteError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Abstract repository for entry storage
pub trait EntryRepository {
    /// Directory holding the dated entries
    fn notes_dir(&self) -> PathBuf;

    /// Full path of the entry for a date
    fn entry_path(&self, date: NaiveDate) -> PathBuf;

    /// Check if the entry for a date exists
    fn entry_exists(&self, date: NaiveDate) -> bool;

    /// Read an entry (returns empty string if the file doesn't exist)
    fn read_entry(&self, date: NaiveDate) -> Result<String>;

    /// Write an entry, creating the notes directory if needed.
    /// Replaces an existing entry in one rename, so a failed write leaves
    /// the old file intact.
    fn write_entry(&self, date: NaiveDate, content: &str) -> Result<PathBuf>;
}

/// File system implementation of EntryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    notes_dir: String,
}

impl FileSystemRepository {
    /// Create a new repository with the given root and notes directory name
    pub fn new(root: PathBuf, notes_dir: impl Into<String>) -> Self {
        FileSystemRepository {
            root,
            notes_dir: notes_dir.into(),
        }
    }

    /// Create a repository rooted at `root`, laid out per `config`
    pub fn from_config(root: PathBuf, config: &Config) -> Self {
        FileSystemRepository::new(root, config.notes_dir.clone())
    }
}

impl EntryRepository for FileSystemRepository {
    fn notes_dir(&self) -> PathBuf {
        self.root.join(&self.notes_dir)
    }

    fn entry_path(&self, date: NaiveDate) -> PathBuf {
        self.notes_dir().join(filename_for_date(date))
    }

    fn entry_exists(&self, date: NaiveDate) -> bool {
        self.entry_path(date).exists()
    }

    fn read_entry(&self, date: NaiveDate) -> Result<String> {
        let path = self.entry_path(date);

        if !path.exists() {
            return Ok(String::new());
        }

        fs::read_to_string(&path).map_err(DailyNoteError::Io)
    }

    fn write_entry(&self, date: NaiveDate, content: &str) -> Result<PathBuf> {
        let notes_dir = self.notes_dir();
        // create_dir_all is a no-op when the directory is already there
        fs::create_dir_all(&notes_dir)?;

        // Same directory as the target so the rename stays on one filesystem
        let mut staged = NamedTempFile::new_in(&notes_dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;

        let path = self.entry_path(date);
        staged.persist(&path).map_err(|e| DailyNoteError::Io(e.error))?;
        Ok(path)
    }
}
