//! Interactive listing browser
//!
//! This module provides the retro-styled TUI listing for works and
//! articles. It is split the same way the rest of the crate is: a
//! UI-agnostic session holding all state and logic, and a ratatui layer
//! that renders it and performs side effects.
//!
//! # Architecture
//!
//! - `session`: state and key handling (`ListingSession`, `SessionEvent`)
//! - `theme`: dark/light palettes
//! - `ui`: ratatui rendering and the terminal event loop

pub mod session;
pub mod theme;
pub mod ui;

pub use session::{ListingSession, Screen, SessionEvent};
pub use theme::Palette;

use thiserror::Error;

/// Errors from the interactive browser
///
/// Link and clipboard failures are reported in the status line instead of
/// aborting the session; only terminal I/O tears the browser down.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Terminal I/O failure
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}
