//! Domain model for portfolio content
//!
//! These are pure data structures with minimal logic; conversions from the
//! wire format live in [`crate::content::api`]. Fields are public for
//! direct access.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::engine::Searchable;

// ============================================================================
// Core Domain Types
// ============================================================================

/// One listable unit of portfolio content (a work or an article)
///
/// Fetched once per screen load and treated as read-only for the rest of
/// that screen's lifetime; the filter engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    /// Stable CMS identifier.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Tags as authored: order preserved, duplicates possible,
    /// case-sensitive.
    pub tags: Vec<String>,

    /// Kind discriminator; articles carry none.
    pub kind: Option<ContentKind>,

    /// Short description, searched together with title and tags.
    pub summary: Option<String>,

    /// Publication date, display only.
    pub published: Option<DateTime<Utc>>,

    /// Main image URL, display only.
    pub image: Option<String>,

    /// Outbound links.
    pub links: ContentLinks,
}

/// Kind of a work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Development project.
    Development,
    /// Digital illustration.
    Illustration,
}

impl ContentKind {
    /// Short badge shown next to an item.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "DEV",
            Self::Illustration => "ART",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outbound links of a work
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentLinks {
    /// Live demo.
    pub demo: Option<String>,

    /// Source repository.
    pub source: Option<String>,

    /// Gallery page.
    pub gallery: Option<String>,
}

impl ContentLinks {
    /// The most relevant link: demo, then source, then gallery.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.demo
            .as_deref()
            .or(self.source.as_deref())
            .or(self.gallery.as_deref())
    }

    /// Whether the item has no outbound link at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary().is_none()
    }
}

/// One entry of the career timeline
///
/// Career entries are listed chronologically as fetched and are not fed
/// through the filter engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerEntry {
    /// Stable CMS identifier.
    pub id: String,

    /// Role or position title.
    pub title: String,

    /// Tags shown as badges next to the entry.
    pub tags: Vec<String>,

    /// Start date of the entry.
    pub date: Option<DateTime<Utc>>,

    /// Free-text description.
    pub description: Option<String>,
}

// ============================================================================
// Engine Integration
// ============================================================================

impl Searchable for ContentItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn kind(&self) -> Option<ContentKind> {
        self.kind
    }

    fn extra_text(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{item, work};

    #[test]
    fn test_kind_labels() {
        assert_eq!(ContentKind::Development.label(), "DEV");
        assert_eq!(ContentKind::Illustration.to_string(), "ART");
    }

    #[test]
    fn test_primary_link_precedence() {
        let mut links = ContentLinks::default();
        assert!(links.is_empty());

        links.gallery = Some("https://gallery.example".to_string());
        assert_eq!(links.primary(), Some("https://gallery.example"));

        links.source = Some("https://github.com/example".to_string());
        assert_eq!(links.primary(), Some("https://github.com/example"));

        links.demo = Some("https://demo.example".to_string());
        assert_eq!(links.primary(), Some("https://demo.example"));
    }

    #[test]
    fn test_searchable_view() {
        let plain = item("a1", "Game Jam Report", &["Event", "Game"]);
        assert_eq!(Searchable::title(&plain), "Game Jam Report");
        assert_eq!(plain.tags.len(), 2);
        assert_eq!(Searchable::kind(&plain), None);
        assert_eq!(plain.extra_text(), None);

        let mut typed = work("w1", "AI Tool", &["AI"], ContentKind::Development);
        typed.summary = Some("Assistant prototype".to_string());
        assert_eq!(Searchable::kind(&typed), Some(ContentKind::Development));
        assert_eq!(typed.extra_text(), Some("Assistant prototype"));
    }
}
