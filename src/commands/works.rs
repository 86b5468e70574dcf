//! Works command - filtered listing of projects and artworks

use crate::{
    FolioError,
    cli::{FilterArgs, KindArg},
    content::CmsClient,
    engine::{self, FilterSummary, KindFilter},
    output,
};

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the works listing command
///
/// Fetch failures degrade to an empty listing.
pub fn execute(
    client: &CmsClient,
    filter: &FilterArgs,
    kind: Option<KindArg>,
    quiet: bool,
) -> Result<()> {
    let works = client.works_or_empty();

    let mut selection = filter.to_selection();
    if let Some(kind) = kind {
        selection.kind = KindFilter::Only(kind.into());
    }

    let visible = engine::filter_items(&works, &selection);
    let summary = FilterSummary::new(visible.len(), works.len());

    if !quiet {
        println!("{}", output::summary_line(summary));
    }

    if works.is_empty() {
        if !quiet {
            println!("No works available.");
        }
        return Ok(());
    }

    if visible.is_empty() {
        if !quiet {
            println!("No works match the current filters. Drop a tag or clear the search to see more.");
        }
        return Ok(());
    }

    for item in visible {
        println!("{}", output::item_line(item, quiet));
    }
    Ok(())
}
