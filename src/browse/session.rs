//! Listing session state
//!
//! `ListingSession` owns everything the browser renders: the fetched
//! collection, its tag universe, the live [`Selection`] and both cursors.
//! The filtered view is recomputed on every change; the engine is pure and
//! cheap, so no debouncing or caching is needed.
//!
//! The session is UI-agnostic. The ratatui layer feeds key events through
//! [`ListingSession::handle_key`] and performs the returned side effects;
//! tests drive the intent methods directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::content::ContentItem;
use crate::engine::{self, ALL_TAG, FilterSummary, Selection};

/// Which listing the session is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Projects and artworks
    Works,
    /// Blog posts and event reports
    Articles,
}

impl Screen {
    /// Header banner, styled after the site's screen titles.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Works => "★ WORKS ★",
            Self::Articles => "★ ARTICLES ★",
        }
    }

    /// Placeholder shown in an empty search bar.
    #[must_use]
    pub const fn search_hint(self) -> &'static str {
        match self {
            Self::Works => "Search works...",
            Self::Articles => "Search articles...",
        }
    }

    /// Whether the kind filter applies to this screen.
    #[must_use]
    pub const fn has_kind_filter(self) -> bool {
        matches!(self, Self::Works)
    }
}

/// Side effect requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Nothing to do beyond redrawing
    Continue,
    /// Leave the browser
    Quit,
    /// Open a link in the system handler
    OpenUrl(String),
    /// Copy a link to the clipboard
    CopyUrl(String),
    /// Toggle and persist the display theme
    ToggleTheme,
}

/// Interactive state of one listing screen
#[derive(Debug)]
pub struct ListingSession {
    screen: Screen,
    items: Vec<ContentItem>,
    tags: Vec<String>,
    selection: Selection,
    item_cursor: usize,
    chip_cursor: usize,
}

impl ListingSession {
    /// Create a session over a freshly fetched collection.
    ///
    /// The tag universe is derived once here; the collection never changes
    /// for the lifetime of the session.
    #[must_use]
    pub fn new(screen: Screen, items: Vec<ContentItem>) -> Self {
        let tags = engine::tag_universe(&items);

        Self {
            screen,
            items,
            tags,
            selection: Selection::new(),
            item_cursor: 0,
            chip_cursor: 0,
        }
    }

    /// Which listing this session shows.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Current selection state.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Tag chips in display order: the sentinel first, then the universe.
    #[must_use]
    pub fn chips(&self) -> Vec<&str> {
        std::iter::once(ALL_TAG)
            .chain(self.tags.iter().map(String::as_str))
            .collect()
    }

    /// The chip under the cursor.
    #[must_use]
    pub fn highlighted_chip(&self) -> &str {
        if self.chip_cursor == 0 {
            ALL_TAG
        } else {
            &self.tags[self.chip_cursor - 1]
        }
    }

    /// Items passing the current selection, in fetch order.
    #[must_use]
    pub fn visible(&self) -> Vec<&ContentItem> {
        engine::filter_items(&self.items, &self.selection)
    }

    /// Shown-vs-total counts for the header.
    #[must_use]
    pub fn summary(&self) -> FilterSummary {
        FilterSummary::new(self.visible().len(), self.items.len())
    }

    /// The item under the cursor, if any is visible.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.visible().into_iter().nth(self.item_cursor)
    }

    /// Item cursor position within the filtered view.
    #[must_use]
    pub const fn item_cursor(&self) -> usize {
        self.item_cursor
    }

    /// Chip cursor position (0 is the sentinel).
    #[must_use]
    pub const fn chip_cursor(&self) -> usize {
        self.chip_cursor
    }

    /// Append a character to the query.
    pub fn push_char(&mut self, c: char) {
        self.selection.query.push(c);
        self.clamp_item_cursor();
    }

    /// Remove the last character of the query.
    pub fn backspace(&mut self) {
        self.selection.query.pop();
        self.clamp_item_cursor();
    }

    /// Move the item cursor down.
    pub fn next_item(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.item_cursor + 1 < len {
            self.item_cursor += 1;
        }
    }

    /// Move the item cursor up.
    pub fn prev_item(&mut self) {
        self.item_cursor = self.item_cursor.saturating_sub(1);
    }

    /// Move the chip cursor right, wrapping.
    pub fn next_chip(&mut self) {
        let count = self.tags.len() + 1;
        self.chip_cursor = (self.chip_cursor + 1) % count;
    }

    /// Move the chip cursor left, wrapping.
    pub fn prev_chip(&mut self) {
        let count = self.tags.len() + 1;
        self.chip_cursor = (self.chip_cursor + count - 1) % count;
    }

    /// Toggle the chip under the cursor.
    pub fn toggle_highlighted_chip(&mut self) {
        let chip = self.highlighted_chip().to_string();
        self.selection = self.selection.toggle_tag(&chip);
        self.clamp_item_cursor();
    }

    /// Cycle the kind filter; no-op on screens without one.
    pub fn cycle_kind(&mut self) {
        if self.screen.has_kind_filter() {
            self.selection.kind = self.selection.kind.cycled();
            self.clamp_item_cursor();
        }
    }

    /// Reset query, tags and kind filter to defaults.
    pub fn reset(&mut self) {
        self.selection = Selection::new();
        self.item_cursor = 0;
        self.chip_cursor = 0;
    }

    fn clamp_item_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.item_cursor = 0;
        } else if self.item_cursor >= len {
            self.item_cursor = len - 1;
        }
    }

    /// Translate a key press into state changes and a side effect.
    pub fn handle_key(&mut self, key: KeyEvent) -> SessionEvent {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => SessionEvent::Quit,
                KeyCode::Char('r') => {
                    self.reset();
                    SessionEvent::Continue
                }
                KeyCode::Char('k') => {
                    self.cycle_kind();
                    SessionEvent::Continue
                }
                KeyCode::Char('t') => SessionEvent::ToggleTheme,
                KeyCode::Char('o') => self.primary_link().map_or(SessionEvent::Continue, SessionEvent::OpenUrl),
                KeyCode::Char('y') => self.primary_link().map_or(SessionEvent::Continue, SessionEvent::CopyUrl),
                _ => SessionEvent::Continue,
            };
        }

        match key.code {
            KeyCode::Esc => SessionEvent::Quit,
            KeyCode::Up => {
                self.prev_item();
                SessionEvent::Continue
            }
            KeyCode::Down => {
                self.next_item();
                SessionEvent::Continue
            }
            KeyCode::Tab => {
                self.next_chip();
                SessionEvent::Continue
            }
            KeyCode::BackTab => {
                self.prev_chip();
                SessionEvent::Continue
            }
            KeyCode::Enter => {
                self.toggle_highlighted_chip();
                SessionEvent::Continue
            }
            KeyCode::Backspace => {
                self.backspace();
                SessionEvent::Continue
            }
            KeyCode::Char(c) => {
                self.push_char(c);
                SessionEvent::Continue
            }
            _ => SessionEvent::Continue,
        }
    }

    fn primary_link(&self) -> Option<String> {
        self.selected_item()
            .and_then(|item| item.links.primary())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;
    use crate::engine::KindFilter;
    use crate::testing::{event_articles, sample_works};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_new_session_shows_everything() {
        let session = ListingSession::new(Screen::Articles, event_articles());

        assert_eq!(session.summary(), FilterSummary::new(2, 2));
        assert_eq!(session.chips(), ["all", "AI", "Event", "Game"]);
        assert_eq!(session.highlighted_chip(), ALL_TAG);
    }

    #[test]
    fn test_typing_filters_live() {
        let mut session = ListingSession::new(Screen::Articles, event_articles());

        for c in "game".chars() {
            session.push_char(c);
        }
        assert_eq!(session.summary(), FilterSummary::new(1, 2));
        assert_eq!(session.selected_item().unwrap().title, "Game Jam Report");

        session.backspace();
        session.backspace();
        session.backspace();
        session.backspace();
        assert_eq!(session.summary(), FilterSummary::new(2, 2));
    }

    #[test]
    fn test_cursor_clamps_when_view_shrinks() {
        let mut session = ListingSession::new(Screen::Articles, event_articles());

        session.next_item();
        assert_eq!(session.item_cursor(), 1);

        // "ai" narrows the view to one item; the cursor must follow.
        session.push_char('a');
        session.push_char('i');
        assert_eq!(session.item_cursor(), 0);
        assert_eq!(session.selected_item().unwrap().title, "AI Tool");
    }

    #[test]
    fn test_chip_toggle_honors_sentinel_rules() {
        let mut session = ListingSession::new(Screen::Articles, event_articles());

        // Chips are ["all", "AI", "Event", "Game"]; select "AI".
        session.next_chip();
        session.toggle_highlighted_chip();
        assert!(session.selection().is_selected("AI"));
        assert_eq!(session.summary().shown, 1);

        // Toggling it off restores the sentinel.
        session.toggle_highlighted_chip();
        assert!(session.selection().is_selected(ALL_TAG));
        assert_eq!(session.summary().shown, 2);
    }

    #[test]
    fn test_chip_cursor_wraps() {
        let mut session = ListingSession::new(Screen::Articles, event_articles());

        session.prev_chip();
        assert_eq!(session.highlighted_chip(), "Game");
        session.next_chip();
        assert_eq!(session.highlighted_chip(), ALL_TAG);
    }

    #[test]
    fn test_kind_cycle_is_noop_on_articles() {
        let mut session = ListingSession::new(Screen::Articles, event_articles());
        session.cycle_kind();
        assert_eq!(session.selection().kind, KindFilter::All);
    }

    #[test]
    fn test_kind_cycle_on_works() {
        let mut session = ListingSession::new(Screen::Works, sample_works());
        let total = session.summary().total;

        session.cycle_kind();
        assert_eq!(
            session.selection().kind,
            KindFilter::Only(ContentKind::Development)
        );
        assert!(session.summary().shown < total);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = ListingSession::new(Screen::Works, sample_works());

        session.push_char('z');
        session.next_chip();
        session.toggle_highlighted_chip();
        session.cycle_kind();
        session.reset();

        assert!(session.selection().is_default());
        assert_eq!(session.summary().shown, session.summary().total);
        assert_eq!(session.chip_cursor(), 0);
    }

    #[test]
    fn test_no_results_is_a_normal_state() {
        let mut session = ListingSession::new(Screen::Articles, event_articles());

        for c in "zzz".chars() {
            session.push_char(c);
        }
        assert!(session.summary().is_no_results());
        assert!(session.visible().is_empty());
        assert_eq!(session.selected_item(), None);
    }

    #[test]
    fn test_handle_key_flow() {
        let mut session = ListingSession::new(Screen::Articles, event_articles());

        assert_eq!(session.handle_key(key(KeyCode::Char('g'))), SessionEvent::Continue);
        assert_eq!(session.selection().query, "g");

        assert_eq!(session.handle_key(key(KeyCode::Backspace)), SessionEvent::Continue);
        assert!(session.selection().query.is_empty());

        assert_eq!(session.handle_key(key(KeyCode::Tab)), SessionEvent::Continue);
        assert_eq!(session.handle_key(key(KeyCode::Enter)), SessionEvent::Continue);
        assert!(session.selection().is_selected("AI"));

        assert_eq!(session.handle_key(ctrl('r')), SessionEvent::Continue);
        assert!(session.selection().is_default());

        assert_eq!(session.handle_key(ctrl('t')), SessionEvent::ToggleTheme);
        assert_eq!(session.handle_key(key(KeyCode::Esc)), SessionEvent::Quit);
        assert_eq!(session.handle_key(ctrl('c')), SessionEvent::Quit);
    }

    #[test]
    fn test_open_and_copy_use_primary_link() {
        let mut session = ListingSession::new(Screen::Works, sample_works());

        // First sample work links to its demo.
        match session.handle_key(ctrl('o')) {
            SessionEvent::OpenUrl(url) => assert_eq!(url, "https://shop.example"),
            other => panic!("unexpected event: {other:?}"),
        }
        match session.handle_key(ctrl('y')) {
            SessionEvent::CopyUrl(url) => assert_eq!(url, "https://shop.example"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_open_without_link_is_ignored() {
        let mut session = ListingSession::new(Screen::Articles, event_articles());
        assert_eq!(session.handle_key(ctrl('o')), SessionEvent::Continue);
    }
}
