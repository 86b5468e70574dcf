//! Content layer - domain model and CMS retrieval
//!
//! This module owns the boundary with the headless CMS: wire types that
//! mirror the backend schema, conversions into the display-shaped domain
//! model, and a blocking HTTP client. Fetch failures never cross this
//! boundary; the degrading accessors hand the listing screens an empty
//! collection instead.

pub mod api;
pub mod client;
pub mod error;
pub mod model;

pub use api::{ListResponse, RawArticle, RawCareer, RawImage, RawWork};
pub use client::{ClientSettings, CmsClient};
pub use error::ContentError;
pub use model::{CareerEntry, ContentItem, ContentKind, ContentLinks};
