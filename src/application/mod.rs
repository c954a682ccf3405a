//! Application layer - Use cases and orchestration

pub mod collect_input;
pub mod new_entry;

pub use collect_input::{collect_input, CollectOptions, EntryArgs};
pub use new_entry::{EntryOutcome, NewEntryRequest, NewEntryService};
