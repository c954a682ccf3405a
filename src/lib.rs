//! daily-note - Weather-stamped daily journal entries
//!
//! Collects a title, mood, energy and location, adds the current weather from
//! wttr.in, and saves the result as `Daily_Notes/YYYY-MM-DD.md` with a
//! front-matter header.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DailyNoteError;
