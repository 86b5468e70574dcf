//! Integration tests for folio
//!
//! These tests verify the full pipeline: CMS payload decoding into the
//! domain model, filtering through the engine, and driving a listing
//! session, plus the degrade-to-empty behavior of the client and
//! configuration round-trips.

use std::time::Duration;

use folio::browse::{ListingSession, Screen, SessionEvent};
use folio::cli::FilterArgs;
use folio::config::{FolioConfig, ThemeMode};
use folio::content::{
    ClientSettings, CmsClient, ContentItem, ContentKind, ListResponse, RawArticle, RawWork,
};
use folio::engine::{self, ALL_TAG, FilterSummary, Selection};

/// Decode a works payload the way the client does.
fn decode_works(json: &str) -> Vec<ContentItem> {
    let response: ListResponse<RawWork> = serde_json::from_str(json).unwrap();
    response.contents.into_iter().map(ContentItem::from).collect()
}

fn decode_articles(json: &str) -> Vec<ContentItem> {
    let response: ListResponse<RawArticle> = serde_json::from_str(json).unwrap();
    response.contents.into_iter().map(ContentItem::from).collect()
}

fn works_payload() -> &'static str {
    r#"{
        "contents": [
            {
                "id": "w1",
                "title": "Storefront Platform",
                "tag": ["React", "Rust"],
                "type": true,
                "date": "2024-05-01T00:00:00.000Z",
                "description": "Full-stack storefront with payment integration",
                "mainImage": { "url": "https://img.example/w1.png" },
                "demourl": "https://shop.example",
                "githuburl": "https://github.com/example/shop"
            },
            {
                "id": "w2",
                "title": "Character Design Series",
                "tag": ["Clip Studio Paint"],
                "type": false,
                "date": "2023-09-15T00:00:00.000Z",
                "topazurl": "https://gallery.example/w2"
            },
            {
                "id": "w3",
                "title": "Portfolio Site",
                "tag": ["Next.js", "React"],
                "type": true
            }
        ],
        "totalCount": 3,
        "offset": 0,
        "limit": 100
    }"#
}

fn articles_payload() -> &'static str {
    r#"{
        "contents": [
            { "id": "a1", "title": "Game Jam Report", "tag": ["Event", "Game"] },
            { "id": "a2", "title": "AI Tool", "tag": ["Event", "AI"] }
        ],
        "totalCount": 2,
        "offset": 0,
        "limit": 100
    }"#
}

#[test]
fn test_works_payload_through_engine() {
    let works = decode_works(works_payload());

    assert_eq!(works.len(), 3);
    assert_eq!(works[0].kind, Some(ContentKind::Development));
    assert_eq!(works[1].kind, Some(ContentKind::Illustration));
    assert_eq!(
        works[1].links.primary(),
        Some("https://gallery.example/w2")
    );

    // Tag universe is sorted and deduplicated ("React" appears twice).
    assert_eq!(
        engine::tag_universe(&works),
        ["Clip Studio Paint", "Next.js", "React", "Rust"]
    );

    // Tag filter keeps fetch order.
    let selection = Selection::new().toggle_tag("React");
    let visible = engine::filter_items(&works, &selection);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].id, "w1");
    assert_eq!(visible[1].id, "w3");

    // The query also matches the description.
    let mut by_summary = Selection::new();
    by_summary.query = "payment".to_string();
    let visible = engine::filter_items(&works, &by_summary);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "w1");
}

#[test]
fn test_articles_payload_scenarios() {
    let articles = decode_articles(articles_payload());

    // Title match, case-insensitive.
    let mut by_query = Selection::new();
    by_query.query = "game".to_string();
    let visible = engine::filter_items(&articles, &by_query);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Game Jam Report");

    // Concrete tag match.
    let by_tag = Selection::new().toggle_tag("AI");
    let visible = engine::filter_items(&articles, &by_tag);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "AI Tool");

    // Shared tag keeps both, in order.
    let shared = Selection::new().toggle_tag("Event");
    let visible = engine::filter_items(&articles, &shared);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].title, "Game Jam Report");
    assert_eq!(visible[1].title, "AI Tool");
}

#[test]
fn test_cli_filters_match_engine_semantics() {
    let articles = decode_articles(articles_payload());

    let filter = FilterArgs {
        tags: vec!["Event".to_string()],
        query: Some("ai".to_string()),
    };
    let selection = filter.to_selection();

    let visible = engine::filter_items(&articles, &selection);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "AI Tool");
}

#[test]
fn test_client_degrades_to_empty_on_fetch_failure() {
    let settings = ClientSettings {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(400),
        list_limit: 100,
    };
    let client = CmsClient::with_settings("http://127.0.0.1:9/api/v1", "key", settings).unwrap();

    assert!(client.works_or_empty().is_empty());
    assert!(client.articles_or_empty().is_empty());
    assert!(client.careers_or_empty().is_empty());
}

#[test]
fn test_session_drives_full_listing_flow() {
    let mut session = ListingSession::new(Screen::Works, decode_works(works_payload()));

    assert_eq!(session.summary(), FilterSummary::new(3, 3));
    assert_eq!(
        session.chips(),
        [ALL_TAG, "Clip Studio Paint", "Next.js", "React", "Rust"]
    );

    // Narrow by query, then by tag chip.
    session.push_char('r');
    session.push_char('e');
    assert_eq!(session.summary().shown, 2);

    session.next_chip();
    session.toggle_highlighted_chip();
    assert!(session.selection().is_selected("Clip Studio Paint"));
    assert!(session.summary().is_no_results());

    // Reset restores the identity view.
    session.reset();
    assert_eq!(session.summary(), FilterSummary::new(3, 3));
    assert!(session.selection().is_selected(ALL_TAG));

    // Kind cycling applies on the works screen.
    session.cycle_kind();
    assert_eq!(session.summary().shown, 2);
    session.cycle_kind();
    assert_eq!(session.summary().shown, 1);
    session.cycle_kind();
    assert_eq!(session.summary().shown, 3);
}

#[test]
fn test_session_open_event_carries_primary_link() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let mut session = ListingSession::new(Screen::Works, decode_works(works_payload()));

    let event = session.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL));
    assert_eq!(
        event,
        SessionEvent::OpenUrl("https://shop.example".to_string())
    );
}

#[test]
fn test_config_round_trip_and_theme_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio").join("config.toml");

    let mut config = FolioConfig::default();
    config.api.base_url = "https://example.microcms.io/api/v1".to_string();
    config.theme = config.theme.toggled();
    config.save_to(&path).unwrap();

    let loaded = FolioConfig::load_from(&path).unwrap();
    assert_eq!(loaded.theme, ThemeMode::Light);
    assert_eq!(loaded.api.base_url, "https://example.microcms.io/api/v1");
}
