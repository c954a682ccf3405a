//! CLI argument definitions

use crate::application::{EntryArgs, NewEntryRequest};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daily-note")]
#[command(about = "Write today's diary entry, stamped with the local weather", long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Title of the entry
    #[arg(value_name = "TITLE")]
    pub title: Option<String>,

    /// Mood 1-5 (or miserable, sad, okay, happy, joyful)
    #[arg(value_name = "MOOD")]
    pub mood: Option<String>,

    /// Energy 1-5 (or exhausted, tired, okay, active, buzzing)
    #[arg(value_name = "ENERGY")]
    pub energy: Option<String>,

    /// Name of where you are (e.g., Home)
    #[arg(value_name = "LOCATION_TITLE")]
    pub location_title: Option<String>,

    /// Quick entry without prompts; prints the entry instead of saving it
    #[arg(short, long)]
    pub quick: bool,

    /// Don't open the entry after writing it
    #[arg(long)]
    pub no_open: bool,

    /// Journal root (default: current directory)
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

impl Cli {
    pub fn entry_request(&self) -> NewEntryRequest {
        NewEntryRequest {
            args: EntryArgs {
                title: self.title.clone(),
                mood: self.mood.clone(),
                energy: self.energy.clone(),
                location_title: self.location_title.clone(),
            },
            quick: self.quick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positionals_in_order() {
        let cli = Cli::parse_from(["daily-note", "Walk", "4", "2", "Park"]);
        let request = cli.entry_request();

        assert_eq!(request.args.title.as_deref(), Some("Walk"));
        assert_eq!(request.args.mood.as_deref(), Some("4"));
        assert_eq!(request.args.energy.as_deref(), Some("2"));
        assert_eq!(request.args.location_title.as_deref(), Some("Park"));
        assert!(!request.quick);
    }

    #[test]
    fn test_missing_positionals_are_none() {
        let cli = Cli::parse_from(["daily-note", "Walk"]);
        assert_eq!(cli.title.as_deref(), Some("Walk"));
        assert!(cli.mood.is_none());
        assert!(cli.energy.is_none());
        assert!(cli.location_title.is_none());
    }

    #[test]
    fn test_quick_flag() {
        assert!(Cli::parse_from(["daily-note", "-q"]).quick);
        assert!(Cli::parse_from(["daily-note", "--quick"]).entry_request().quick);
    }

    #[test]
    fn test_dir_and_no_open() {
        let cli = Cli::parse_from(["daily-note", "--no-open", "-C", "/tmp/journal"]);
        assert!(cli.no_open);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/journal")));
    }

    #[test]
    fn test_negative_mood_is_a_value() {
        let cli = Cli::parse_from(["daily-note", "Walk", "-1"]);
        assert_eq!(cli.mood.as_deref(), Some("-1"));
    }
}
