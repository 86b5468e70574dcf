//! Config command - inspect and change stored settings

use crate::{
    FolioError,
    cli::ConfigCommands,
    config::{FolioConfig, ThemeMode, first_time_setup},
};

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the config management command
///
/// # Errors
///
/// Returns `FolioError::Config` if the configuration cannot be loaded or
/// saved.
pub fn execute(command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(quiet),
        ConfigCommands::Theme { mode } => set_theme((*mode).into(), quiet),
        ConfigCommands::Init => {
            first_time_setup()?;
            Ok(())
        }
    }
}

fn show(quiet: bool) -> Result<()> {
    let path = FolioConfig::config_path()?;
    let config = FolioConfig::load()?;

    if quiet {
        println!("{}", path.display());
        return Ok(());
    }

    println!("Config file: {}", path.display());
    println!(
        "  CMS base URL: {}",
        if config.api.base_url.is_empty() {
            "(not set)"
        } else {
            config.api.base_url.as_str()
        }
    );
    println!(
        "  API key: {}",
        if config.api.api_key.is_empty() {
            "(not set)"
        } else {
            "(stored)"
        }
    );
    println!("  Theme: {}", config.theme.as_str());
    println!("  Quiet: {}", config.quiet);
    Ok(())
}

fn set_theme(mode: ThemeMode, quiet: bool) -> Result<()> {
    let mut config = FolioConfig::load()?;
    config.theme = mode;
    config.save()?;

    if !quiet {
        println!("Theme set to {}.", mode.as_str());
    }
    Ok(())
}
