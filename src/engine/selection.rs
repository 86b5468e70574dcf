//! Selection state for listing screens
//!
//! A [`Selection`] is the UI-owned query state of one listing: free-text
//! query, selected tags and kind filter. The tag set is a two-mode
//! automaton: either the `all` sentinel is selected, or one-or-more
//! concrete tags are; it is never empty and never mixes the two. The
//! [`TagSelection`] enum encodes that invariant in the type.
//!
//! Toggling is a pure function; the caller owns the returned state. A
//! selection never outlives its collection: screens reset to defaults on
//! reload.

use crate::content::ContentKind;

/// Reserved tag value meaning "no tag filter is active".
pub const ALL_TAG: &str = "all";

/// Tag portion of a [`Selection`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagSelection {
    /// The sentinel: every item passes the tag predicate.
    #[default]
    All,
    /// One or more concrete tags; an item passes on any exact,
    /// case-sensitive match. Never constructed empty.
    Tags(Vec<String>),
}

impl TagSelection {
    /// Whether the sentinel is selected.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Concrete tags currently selected (empty for the sentinel).
    #[must_use]
    pub fn concrete(&self) -> &[String] {
        match self {
            Self::All => &[],
            Self::Tags(tags) => tags,
        }
    }
}

/// Kind filter applied before tag and query predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// No kind filter.
    #[default]
    All,
    /// Only items of this kind pass.
    Only(ContentKind),
}

impl KindFilter {
    /// Whether an item with the given kind passes this filter.
    ///
    /// Items without a kind fail whenever a concrete filter is active.
    #[must_use]
    pub fn matches(self, kind: Option<ContentKind>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => kind == Some(wanted),
        }
    }

    /// Next filter in the all → development → illustration cycle.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::All => Self::Only(ContentKind::Development),
            Self::Only(ContentKind::Development) => Self::Only(ContentKind::Illustration),
            Self::Only(ContentKind::Illustration) => Self::All,
        }
    }

    /// Short label for status displays.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Only(kind) => kind.label(),
        }
    }
}

/// Mutable query state driving one filtered listing
///
/// Initial state is an empty query, the `all` sentinel and no kind filter;
/// that state filters nothing out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Free-text query; matched untrimmed and case-insensitively.
    pub query: String,
    /// Selected tags.
    pub tags: TagSelection,
    /// Kind filter; only the Works screen exposes it.
    pub kind: KindFilter,
}

impl Selection {
    /// Create the default selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `tag`, returning the next selection.
    ///
    /// Selecting the `all` sentinel is an unconditional reset of the tag
    /// set, not a toggle. Toggling a concrete tag always drops the
    /// sentinel; removing the last concrete tag restores it.
    #[must_use]
    pub fn toggle_tag(&self, tag: &str) -> Self {
        let tags = if tag == ALL_TAG {
            TagSelection::All
        } else {
            let mut selected = self.tags.concrete().to_vec();
            match selected.iter().position(|t| t == tag) {
                Some(pos) => {
                    selected.remove(pos);
                }
                None => selected.push(tag.to_string()),
            }

            if selected.is_empty() {
                TagSelection::All
            } else {
                TagSelection::Tags(selected)
            }
        };

        Self {
            query: self.query.clone(),
            tags,
            kind: self.kind,
        }
    }

    /// Whether `tag` is currently selected.
    ///
    /// The sentinel is selected exactly when no concrete tag is.
    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        if tag == ALL_TAG {
            self.tags.is_all()
        } else {
            self.tags.concrete().iter().any(|t| t == tag)
        }
    }

    /// True when query, tags and kind are all at their defaults.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.tags.is_all() && self.kind == KindFilter::All
    }
}
