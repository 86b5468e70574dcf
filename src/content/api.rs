//! Wire types for the CMS list API
//!
//! Field names follow the backend schema verbatim, including the
//! misspelled `dscription` on career entries; the `From` conversions
//! normalize them into the domain model. Unknown fields are ignored so
//! schema additions on the CMS side do not break decoding.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::model::{CareerEntry, ContentItem, ContentKind, ContentLinks};

/// List envelope returned by every collection endpoint
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    /// Entries of the requested page.
    pub contents: Vec<T>,
    /// Total entries in the collection.
    #[serde(rename = "totalCount", default)]
    pub total_count: usize,
    /// Page offset.
    #[serde(default)]
    pub offset: usize,
    /// Page size.
    #[serde(default)]
    pub limit: usize,
}

/// Image reference as stored by the CMS
#[derive(Debug, Deserialize)]
pub struct RawImage {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A work as served by the `works` endpoint
#[derive(Debug, Deserialize)]
pub struct RawWork {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tag: Vec<String>,
    /// The backend stores "is this a development project" as a boolean.
    #[serde(default, rename = "type")]
    pub development: Option<bool>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "mainImage")]
    pub main_image: Option<RawImage>,
    #[serde(default)]
    pub demourl: Option<String>,
    #[serde(default)]
    pub githuburl: Option<String>,
    #[serde(default)]
    pub topazurl: Option<String>,
}

impl From<RawWork> for ContentItem {
    fn from(raw: RawWork) -> Self {
        // An absent flag coerces to illustration, matching the backend's
        // treatment of `type` as "is development".
        let kind = if raw.development.unwrap_or(false) {
            ContentKind::Development
        } else {
            ContentKind::Illustration
        };

        Self {
            id: raw.id,
            title: raw.title,
            tags: raw.tag,
            kind: Some(kind),
            summary: raw.description,
            published: raw.date,
            image: raw.main_image.map(|image| image.url),
            links: ContentLinks {
                demo: raw.demourl,
                source: raw.githuburl,
                gallery: raw.topazurl,
            },
        }
    }
}

/// An article as served by the `articles` endpoint
#[derive(Debug, Deserialize)]
pub struct RawArticle {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<RawArticle> for ContentItem {
    fn from(raw: RawArticle) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            tags: raw.tag,
            kind: None,
            summary: raw.description,
            published: raw.date,
            image: None,
            links: ContentLinks::default(),
        }
    }
}

/// A career entry as served by the `career` endpoint
#[derive(Debug, Deserialize)]
pub struct RawCareer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tag: Vec<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Field name is misspelled in the backend schema.
    #[serde(default)]
    pub dscription: Option<String>,
}

impl From<RawCareer> for CareerEntry {
    fn from(raw: RawCareer) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            tags: raw.tag,
            date: raw.date,
            description: raw.dscription,
        }
    }
}
