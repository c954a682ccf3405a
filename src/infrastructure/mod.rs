//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod opener;
pub mod prompt;
pub mod repository;
pub mod weather;

pub use config::Config;
pub use opener::{FileOpener, NoopOpener, SystemOpener};
pub use prompt::{InputSource, TerminalInput};
pub use repository::{EntryRepository, FileSystemRepository};
pub use weather::{WeatherSource, WttrClient};
