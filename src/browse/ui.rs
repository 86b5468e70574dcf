//! Ratatui front-end for the listing browser
//!
//! Renders the session and drives the terminal event loop. Layout, top to
//! bottom: banner with shown-vs-total counts, search bar, tag chip row,
//! item list (or the no-results panel), and a help/status footer.

use std::io::{self, Stdout};
use std::time::Duration;

use arboard::Clipboard;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::BrowseError;
use super::session::{ListingSession, SessionEvent};
use super::theme::Palette;
use crate::config::FolioConfig;
use crate::engine::{ALL_TAG, KindFilter};

/// Run the browser until the user quits.
///
/// Theme toggles are applied to the palette and saved back to `config`
/// immediately; a failed save is logged and the session continues.
///
/// # Errors
///
/// Returns `BrowseError::Io` if the terminal cannot be set up or drawn to.
pub fn run(mut session: ListingSession, config: &mut FolioConfig) -> Result<(), BrowseError> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut session, config);
    cleanup_terminal()?;
    result
}

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, BrowseError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<(), BrowseError> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut ListingSession,
    config: &mut FolioConfig,
) -> Result<(), BrowseError> {
    let mut palette = Palette::for_mode(config.theme);
    let mut status: Option<String> = None;

    loop {
        terminal.draw(|frame| render(frame, session, &palette, status.as_deref()))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        status = None;
        match session.handle_key(key) {
            SessionEvent::Continue => {}
            SessionEvent::Quit => return Ok(()),
            SessionEvent::OpenUrl(url) => {
                status = Some(match open::that(&url) {
                    Ok(()) => format!("Opened {url}"),
                    Err(err) => {
                        warn!("failed to open {url}: {err}");
                        format!("Could not open link: {err}")
                    }
                });
            }
            SessionEvent::CopyUrl(url) => {
                status = Some(match copy_to_clipboard(&url) {
                    Ok(()) => format!("Copied {url}"),
                    Err(err) => {
                        warn!("clipboard unavailable: {err}");
                        format!("Could not copy link: {err}")
                    }
                });
            }
            SessionEvent::ToggleTheme => {
                config.theme = config.theme.toggled();
                palette = Palette::for_mode(config.theme);
                if let Err(err) = config.save() {
                    warn!("failed to save theme: {err}");
                }
                status = Some(format!("Theme: {}", config.theme.as_str()));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    Clipboard::new()?.set_text(text.to_string())
}

fn render(frame: &mut Frame, session: &ListingSession, palette: &Palette, status: Option<&str>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, rows[0], session, palette);
    render_search(frame, rows[1], session, palette);
    render_chips(frame, rows[2], session, palette);
    render_list(frame, rows[3], session, palette);
    render_footer(frame, rows[4], session, palette, status);
}

fn render_header(frame: &mut Frame, area: Rect, session: &ListingSession, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(session.screen().title(), palette.header_style()),
        Span::raw("  "),
        Span::styled(session.summary().to_string(), palette.dimmed_style()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_search(frame: &mut Frame, area: Rect, session: &ListingSession, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.accent_style())
        .title(" Search ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
    let query = &session.selection().query;
    let spans = if query.is_empty() {
        vec![
            cursor,
            Span::styled(
                format!(" {}", session.screen().search_hint()),
                palette.dimmed_style(),
            ),
        ]
    } else {
        vec![
            Span::styled(query.clone(), palette.text_style()),
            cursor,
        ]
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_chips(frame: &mut Frame, area: Rect, session: &ListingSession, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(" Tags ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (idx, chip) in session.chips().into_iter().enumerate() {
        let mut style = if session.selection().is_selected(chip) {
            palette.chip_active_style()
        } else {
            palette.dimmed_style()
        };
        if idx == session.chip_cursor() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let label = if chip == ALL_TAG { "ALL" } else { chip };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    if session.screen().has_kind_filter() {
        let kind = session.selection().kind;
        let style = if kind == KindFilter::All {
            palette.dimmed_style()
        } else {
            palette.accent_style()
        };
        spans.push(Span::styled(format!(" kind:{}", kind.label()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_list(frame: &mut Frame, area: Rect, session: &ListingSession, palette: &Palette) {
    let title = match session.screen() {
        super::Screen::Works => " Works ",
        super::Screen::Articles => " Articles ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = session.visible();
    if visible.is_empty() {
        let summary = session.summary();
        let message = if summary.is_no_results() {
            "NO RESULTS\n\nNo items match the current filters.\nPress ctrl-r to reset the search and tags."
        } else {
            "Nothing here yet."
        };
        let panel = Paragraph::new(message)
            .style(palette.warning_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(panel, inner);
        return;
    }

    // Keep the cursor row inside the viewport.
    let height = inner.height as usize;
    let cursor = session.item_cursor();
    let offset = if height > 0 && cursor >= height {
        cursor + 1 - height
    } else {
        0
    };

    let mut lines = Vec::new();
    for (idx, item) in visible.iter().enumerate().skip(offset).take(height.max(1)) {
        let selected = idx == cursor;
        let marker_style = if selected {
            palette.accent_style().add_modifier(Modifier::BOLD)
        } else {
            palette.dimmed_style()
        };
        let mut spans = vec![Span::styled(if selected { "> " } else { "  " }, marker_style)];

        if let Some(kind) = item.kind {
            spans.push(Span::styled(
                format!("[{}] ", kind.label()),
                palette.kind_style(kind),
            ));
        }

        let title_style = if selected {
            palette.selected_style()
        } else {
            palette.text_style()
        };
        spans.push(Span::styled(item.title.clone(), title_style));

        if let Some(date) = item.published {
            spans.push(Span::styled(
                format!("  {}", date.format("%Y-%m")),
                palette.dimmed_style(),
            ));
        }

        if !item.tags.is_empty() {
            spans.push(Span::styled(
                format!("  [{}]", item.tags.join(", ")),
                palette.tag_style(),
            ));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    session: &ListingSession,
    palette: &Palette,
    status: Option<&str>,
) {
    let text = status.map_or_else(
        || {
            let mut help = String::from(
                "type: search  ↑/↓: move  tab: tags  enter: toggle  ctrl-r: reset  ctrl-o: open  ctrl-y: copy  ctrl-t: theme  esc: quit",
            );
            if session.screen().has_kind_filter() {
                help.push_str("  ctrl-k: kind");
            }
            help
        },
        str::to_string,
    );

    let line = Line::from(Span::styled(text, palette.dimmed_style()));
    frame.render_widget(Paragraph::new(line), area);
}
