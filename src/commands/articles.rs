//! Articles command - filtered listing of blog posts and event reports

use crate::{
    FolioError,
    cli::FilterArgs,
    content::CmsClient,
    engine::{self, FilterSummary},
    output,
};

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the articles listing command
///
/// Articles carry no kind, so only tag and query filters apply. Fetch
/// failures degrade to an empty listing.
pub fn execute(client: &CmsClient, filter: &FilterArgs, quiet: bool) -> Result<()> {
    let articles = client.articles_or_empty();
    let selection = filter.to_selection();

    let visible = engine::filter_items(&articles, &selection);
    let summary = FilterSummary::new(visible.len(), articles.len());

    if !quiet {
        println!("{}", output::summary_line(summary));
    }

    if articles.is_empty() {
        if !quiet {
            println!("No articles available.");
        }
        return Ok(());
    }

    if visible.is_empty() {
        if !quiet {
            println!("No articles match the current filters. Drop a tag or clear the search to see more.");
        }
        return Ok(());
    }

    for item in visible {
        println!("{}", output::item_line(item, quiet));
    }
    Ok(())
}
