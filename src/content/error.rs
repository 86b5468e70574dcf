//! Content retrieval error types
//!
//! These errors stay inside the content layer: the degrading accessors on
//! [`crate::content::CmsClient`] turn every fetch failure into an empty
//! collection before a listing screen sees it.

use thiserror::Error;

/// Errors from the content-retrieval layer
#[derive(Debug, Error)]
pub enum ContentError {
    /// The stored CMS settings are unusable
    #[error("Invalid CMS configuration: {0}")]
    Configuration(String),

    /// Transport, status or decode failure from the HTTP client
    #[error("CMS request failed: {0}")]
    Http(#[from] reqwest::Error),
}
