//! Capability trait for filterable listing content
//!
//! The Works and Articles screens filter different content shapes with the
//! same logic. [`Searchable`] is the seam that makes this possible: a type
//! exposes its title and tags (and optionally a kind and extra searchable
//! text), and the engine in [`crate::engine::filter`] does the rest. Third
//! party types can implement it to reuse the engine unchanged.

use crate::content::ContentKind;

/// Borrowed view of one listable item, as seen by the filter engine
///
/// Only `title` and `tags` are required; kinds and extra text are opt-in
/// capabilities. All methods borrow, so filtering never clones content.
pub trait Searchable {
    /// Display title, always included in query matching.
    fn title(&self) -> &str;

    /// Tags as authored: order preserved, duplicates possible,
    /// case-sensitive.
    fn tags(&self) -> &[String];

    /// Kind discriminator, if the content type has one.
    ///
    /// Items returning `None` fail whenever a concrete kind filter is
    /// active.
    fn kind(&self) -> Option<ContentKind> {
        None
    }

    /// Additional free text (description, excerpt) included in query
    /// matching.
    fn extra_text(&self) -> Option<&str> {
        None
    }
}
