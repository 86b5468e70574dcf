//! Tags command - tag universe of a listing

use crate::{FolioError, cli::ScreenArg, content::CmsClient, engine, output};

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the tags listing command
///
/// Prints the deduplicated, sorted tag universe of the chosen listing with
/// per-tag usage counts.
pub fn execute(client: &CmsClient, screen: ScreenArg, quiet: bool) -> Result<()> {
    let items = match screen {
        ScreenArg::Works => client.works_or_empty(),
        ScreenArg::Articles => client.articles_or_empty(),
    };

    let universe = engine::tag_universe(&items);

    if universe.is_empty() {
        if !quiet {
            println!("No tags found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in use:");
    }
    for tag in &universe {
        let count = items.iter().filter(|item| item.tags.contains(tag)).count();
        println!("{}", output::tag_with_count(tag, count, quiet));
    }
    Ok(())
}
