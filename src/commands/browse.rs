//! Browse command - interactive TUI listing

use crate::{
    FolioError,
    browse::{ListingSession, Screen, ui},
    cli::ScreenArg,
    config::FolioConfig,
    content::CmsClient,
};

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the interactive browse command
///
/// Fetches the chosen collection once, then hands it to the TUI. An empty
/// fetch still opens the browser, which renders its empty state.
///
/// # Errors
///
/// Returns `FolioError::Browse` if the terminal cannot be driven.
pub fn execute(client: &CmsClient, config: &mut FolioConfig, screen: ScreenArg) -> Result<()> {
    let screen = match screen {
        ScreenArg::Works => Screen::Works,
        ScreenArg::Articles => Screen::Articles,
    };

    let items = match screen {
        Screen::Works => client.works_or_empty(),
        Screen::Articles => client.articles_or_empty(),
    };

    let session = ListingSession::new(screen, items);
    ui::run(session, config)?;
    Ok(())
}
