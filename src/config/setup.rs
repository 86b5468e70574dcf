//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for connecting folio to a
//! CMS when it is run for the first time.

use super::FolioConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for CMS connection settings
///
/// Guides the user through connecting their portfolio CMS:
/// 1. Prompts for the list API base URL
/// 2. Prompts for the API key (may be left blank when `FOLIO_API_KEY` is set)
/// 3. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<FolioConfig, ConfigError> {
    println!("Welcome to folio! Let's connect your portfolio CMS.\n");

    let base_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("CMS list API base URL")
        .default("https://your-service.microcms.io/api/v1".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let api_key: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("API key (leave blank to use FOLIO_API_KEY)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = FolioConfig::default();
    config.api.base_url = base_url.trim_end_matches('/').to_string();
    config.api.api_key = api_key;

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
