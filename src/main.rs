//! Folio CLI application entry point
//!
//! This is the main executable for folio, a terminal browser for a
//! headless-CMS portfolio. It renders filterable listings of works and
//! articles, a career timeline, and an interactive retro-styled TUI.
//!
//! # Usage
//!
//! ```bash
//! # Browse works interactively (default command)
//! folio
//! folio browse articles
//!
//! # Filtered listings on stdout
//! folio works -t React --kind dev
//! folio articles --search "game jam"
//!
//! # Tag universe of a listing
//! folio tags articles
//!
//! # Configuration
//! folio config show
//! folio config theme light
//! ```
//!
//! # Configuration
//!
//! On first run, folio prompts for the CMS connection. Configuration is
//! stored in the user's config directory
//! (`~/.config/folio/config.toml` on Linux); `FOLIO_API_KEY` overrides the
//! stored API key.

use folio::{
    FolioError,
    cli::{Cli, Commands},
    commands,
    config::FolioConfig,
    content::CmsClient,
};
use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

type Result<T> = std::result::Result<T, FolioError>;

fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Initialize terminal logging; best effort, failures are ignored.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = FolioConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;

    match cli.get_command() {
        Commands::Browse { screen } => {
            let client = CmsClient::from_config(&config)?;
            commands::browse(&client, &mut config, screen)
        }
        Commands::Works { filter, kind } => {
            let client = CmsClient::from_config(&config)?;
            commands::works(&client, &filter, kind, quiet)
        }
        Commands::Articles { filter } => {
            let client = CmsClient::from_config(&config)?;
            commands::articles(&client, &filter, quiet)
        }
        Commands::Career => {
            let client = CmsClient::from_config(&config)?;
            commands::career(&client, quiet)
        }
        Commands::Tags { screen } => {
            let client = CmsClient::from_config(&config)?;
            commands::tags(&client, screen, quiet)
        }
        Commands::Config { command } => commands::config(&command, quiet),
    }
}
