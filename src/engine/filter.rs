//! Pure filtering operations over listing collections
//!
//! Everything here is a total function: empty collections, empty queries
//! and empty tag sets all have well-defined, non-exceptional outputs. The
//! filtered sequence preserves the input order; nothing is re-sorted by
//! relevance or any other key.

use std::collections::BTreeSet;
use std::fmt;

use super::selection::{Selection, TagSelection};
use super::traits::Searchable;

/// Distinct tags across `items`, sorted ascending
///
/// The ordering is byte-wise over UTF-8, which coincides with code-point
/// order; it does not depend on locale or on input order. The `all`
/// sentinel is a UI affordance and is never part of the universe. An
/// empty collection yields an empty universe.
#[must_use]
pub fn tag_universe<T: Searchable>(items: &[T]) -> Vec<String> {
    let set: BTreeSet<&str> = items
        .iter()
        .flat_map(Searchable::tags)
        .map(String::as_str)
        .collect();

    set.into_iter().map(str::to_owned).collect()
}

/// Filter `items` against `selection`, preserving input order
///
/// Three predicates run per item, short-circuiting on the first failure:
/// kind, tag intersection, then the free-text query. Re-invocation with
/// identical inputs yields identical output; there is no hidden state, so
/// callers may recompute on every keystroke.
#[must_use]
pub fn filter_items<'a, T: Searchable>(items: &'a [T], selection: &Selection) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| passes(*item, selection))
        .collect()
}

fn passes<T: Searchable>(item: &T, selection: &Selection) -> bool {
    if !selection.kind.matches(item.kind()) {
        return false;
    }

    if let TagSelection::Tags(selected) = &selection.tags {
        if !item.tags().iter().any(|tag| selected.contains(tag)) {
            return false;
        }
    }

    if selection.query.is_empty() {
        return true;
    }

    // The query is matched untrimmed: surrounding whitespace must appear
    // in the searched text as well.
    let query = selection.query.to_lowercase();
    item.title().to_lowercase().contains(&query)
        || item
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
        || item
            .extra_text()
            .is_some_and(|text| text.to_lowercase().contains(&query))
}

/// Shown-vs-total counts for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Items passing the current selection.
    pub shown: usize,
    /// Items in the underlying collection.
    pub total: usize,
}

impl FilterSummary {
    /// Create a summary from shown and total counts.
    #[must_use]
    pub const fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }

    /// True when filters hid every item of a non-empty collection.
    ///
    /// This is the screen's "no results" condition: a normal outcome that
    /// prompts a reset affordance, not an error.
    #[must_use]
    pub const fn is_no_results(self) -> bool {
        self.shown == 0 && self.total > 0
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total: {} | Showing: {}", self.total, self.shown)
    }
}
