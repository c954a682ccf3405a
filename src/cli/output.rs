//! Output formatting utilities

use crate::application::EntryOutcome;

/// Format the result of a run for stdout
pub fn format_outcome(outcome: &EntryOutcome) -> String {
    match outcome {
        EntryOutcome::Printed(document) => document.clone(),
        EntryOutcome::Written { path, .. } => {
            format!("Diary entry created: \n{}\n", path.display())
        }
    }
}
