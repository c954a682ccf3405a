//! Domain layer - Entry model, rating scales and rendering

pub mod entry;
pub mod scale;
pub mod template;
pub mod weather;

pub use entry::{DiaryEntry, EntryInput};
pub use scale::Scale;
pub use template::render_entry;
pub use weather::WeatherSnapshot;
