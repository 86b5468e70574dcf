//! Career command - chronological timeline

use crate::{FolioError, content::CmsClient, output};

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the career timeline command
///
/// Entries are printed newest-first, exactly as the CMS returns them; the
/// timeline has no filtering.
pub fn execute(client: &CmsClient, quiet: bool) -> Result<()> {
    let entries = client.careers_or_empty();

    if entries.is_empty() {
        if !quiet {
            println!("No career entries available.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Career timeline:");
    }
    for entry in &entries {
        println!("{}", output::career_line(entry, quiet));
    }
    Ok(())
}
