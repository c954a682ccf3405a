use chrono::Local;
use clap::Parser;
use daily_note::application::NewEntryService;
use daily_note::cli::{format_outcome, Cli};
use daily_note::error::DailyNoteError;
use daily_note::infrastructure::{
    Config, FileOpener, FileSystemRepository, NoopOpener, SystemOpener, TerminalInput, WttrClient,
};

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(DailyNoteError::Cancelled) => {
            eprintln!("Aborted.");
            std::process::exit(DailyNoteError::Cancelled.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DailyNoteError> {
    let root = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let config = Config::load_from_dir(&root)?;
    let repository = FileSystemRepository::from_config(root, &config);
    let weather = WttrClient::from_config(&config)?;
    let opener: Box<dyn FileOpener> = if cli.no_open {
        Box::new(NoopOpener)
    } else {
        Box::new(SystemOpener::new(config.get_opener()))
    };
    let mut input = TerminalInput::stdio();

    let outcome = NewEntryService::new(repository, &mut input, &weather, opener.as_ref())
        .track_energy(config.track_energy)
        .execute(cli.entry_request(), Local::now().date_naive())?;

    print!("{}", format_outcome(&outcome));
    Ok(())
}
