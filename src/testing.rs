//! Testing fixtures for folio
//!
//! Sample collections shaped like real CMS content, shared by unit tests
//! across the engine, output and browse modules.
//!
//! Only available when compiled with `cfg(test)`.

use chrono::{TimeZone, Utc};

use crate::content::{CareerEntry, ContentItem, ContentKind, ContentLinks};

/// Minimal item with a title and tags; no kind, summary, date or links.
#[must_use]
pub fn item(id: &str, title: &str, tags: &[&str]) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        kind: None,
        summary: None,
        published: None,
        image: None,
        links: ContentLinks::default(),
    }
}

/// Item with a kind, as works carry.
#[must_use]
pub fn work(id: &str, title: &str, tags: &[&str], kind: ContentKind) -> ContentItem {
    ContentItem {
        kind: Some(kind),
        ..item(id, title, tags)
    }
}

/// Career entry with a date and description.
#[must_use]
pub fn career_entry(id: &str, title: &str, description: &str) -> CareerEntry {
    CareerEntry {
        id: id.to_string(),
        title: title.to_string(),
        tags: vec!["Full-time".to_string()],
        date: Some(Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap()),
        description: Some(description.to_string()),
    }
}

/// The article pair used by the filtering scenario tests.
#[must_use]
pub fn event_articles() -> Vec<ContentItem> {
    vec![
        item("a1", "Game Jam Report", &["Event", "Game"]),
        item("a2", "AI Tool", &["Event", "AI"]),
    ]
}

/// A small works collection with both kinds, dates and links.
#[must_use]
pub fn sample_works() -> Vec<ContentItem> {
    vec![
        ContentItem {
            summary: Some("Full-stack storefront with payment integration".to_string()),
            published: Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()),
            links: ContentLinks {
                demo: Some("https://shop.example".to_string()),
                source: Some("https://github.com/example/shop".to_string()),
                gallery: None,
            },
            ..work("w1", "Storefront Platform", &["React", "Rust"], ContentKind::Development)
        },
        ContentItem {
            published: Some(Utc.with_ymd_and_hms(2023, 9, 15, 0, 0, 0).unwrap()),
            ..work(
                "w2",
                "Character Design Series",
                &["Clip Studio Paint"],
                ContentKind::Illustration,
            )
        },
        work("w3", "Portfolio Site", &["Next.js", "React"], ContentKind::Development),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(event_articles().len(), 2);

        let works = sample_works();
        assert_eq!(works.len(), 3);
        assert!(works.iter().all(|w| w.kind.is_some()));
        assert_eq!(works[0].links.primary(), Some("https://shop.example"));
    }
}
