//! Color palettes for the listing browser
//!
//! Dark and light palettes mirror the site's two display modes; the green
//! accent keeps its phosphor-terminal look. The active palette follows the
//! persisted [`ThemeMode`].

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;
use crate::content::ContentKind;

/// Palette for the TUI
#[derive(Debug, Clone)]
pub struct Palette {
    /// Accent color for the header and cursor
    pub accent: Color,
    /// Normal text
    pub text: Color,
    /// Dimmed/inactive text
    pub dimmed: Color,
    /// Borders
    pub border: Color,
    /// Background of the highlighted list row
    pub selection_bg: Color,
    /// Foreground of the highlighted list row
    pub selection_fg: Color,
    /// Color for tags
    pub tag: Color,
    /// Badge color for development works
    pub kind_dev: Color,
    /// Badge color for illustrations
    pub kind_art: Color,
    /// Color for the no-results panel
    pub warning: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    /// Create the dark palette (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Green,
            text: Color::White,
            dimmed: Color::DarkGray,
            border: Color::DarkGray,
            selection_bg: Color::Green,
            selection_fg: Color::Black,
            tag: Color::Magenta,
            kind_dev: Color::Blue,
            kind_art: Color::Magenta,
            warning: Color::Yellow,
        }
    }

    /// Create the light palette
    #[must_use]
    pub const fn light() -> Self {
        Self {
            accent: Color::Green,
            text: Color::Black,
            dimmed: Color::Gray,
            border: Color::Gray,
            selection_bg: Color::Green,
            selection_fg: Color::White,
            tag: Color::Magenta,
            kind_dev: Color::Blue,
            kind_art: Color::Magenta,
            warning: Color::Red,
        }
    }

    /// Palette for a persisted theme mode
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Style for the screen banner
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the focused search border and cursor marks
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the highlighted list row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a selected tag chip
    #[must_use]
    pub fn chip_active_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
    }

    /// Style for item tags
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style for the no-results panel
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning).add_modifier(Modifier::BOLD)
    }

    /// Badge style for a content kind
    #[must_use]
    pub fn kind_style(&self, kind: ContentKind) -> Style {
        let color = match kind {
            ContentKind::Development => self.kind_dev,
            ContentKind::Illustration => self.kind_art,
        };
        Style::default().fg(color)
    }
}
