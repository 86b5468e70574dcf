//! Folio - a terminal client for a headless-CMS portfolio
//!
//! This library provides the pieces of the `folio` binary: a pure filtering
//! engine shared by every listing screen, a content layer that fetches works,
//! articles and career entries from the CMS, and an interactive retro-styled
//! listing browser.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod engine;
pub mod output;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FolioError {
    /// Content retrieval error
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
    /// Interactive browser error
    #[error("Browse error: {0}")]
    Browse(#[from] browse::BrowseError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
