//! Blocking client for the CMS list API
//!
//! One fetch per screen load, tens of items: a blocking client with
//! explicit timeouts is all the transport this needs. Every list request
//! asks for the full collection newest-first.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use super::api::{ListResponse, RawArticle, RawCareer, RawWork};
use super::error::ContentError;
use super::model::{CareerEntry, ContentItem};
use crate::config::FolioConfig;

/// Header carrying the API key, as the CMS expects it.
const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// Transport settings for the CMS client
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Page size requested from list endpoints.
    pub list_limit: usize,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            list_limit: 100,
        }
    }
}

/// Blocking CMS API client
pub struct CmsClient {
    base_url: String,
    api_key: String,
    list_limit: usize,
    http: Client,
}

impl CmsClient {
    /// Create a client with default transport settings.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Configuration` if `base_url` is empty, or
    /// `ContentError::Http` if the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ContentError> {
        Self::with_settings(base_url, api_key, ClientSettings::default())
    }

    /// Create a client with explicit transport settings.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Configuration` if `base_url` is empty, or
    /// `ContentError::Http` if the HTTP client cannot be constructed.
    pub fn with_settings(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        settings: ClientSettings,
    ) -> Result<Self, ContentError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ContentError::Configuration(
                "CMS base URL is not set; run `folio config init`".to_string(),
            ));
        }

        let http = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            list_limit: settings.list_limit,
            http,
        })
    }

    /// Create a client from saved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the configuration holds no usable base URL
    /// or the HTTP client cannot be constructed.
    pub fn from_config(config: &FolioConfig) -> Result<Self, ContentError> {
        Self::new(config.api.base_url.clone(), config.api_key())
    }

    /// Fetch one collection, newest first.
    fn list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, ContentError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("limit", self.list_limit.to_string()),
                ("orders", "-date".to_string()),
            ])
            .send()?
            .error_for_status()?;

        let body: ListResponse<T> = response.json()?;
        debug!(
            "{endpoint}: fetched {} of {} entries",
            body.contents.len(),
            body.total_count
        );
        Ok(body.contents)
    }

    /// Fetch the works collection.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Http` on transport, status or decode failure.
    pub fn works(&self) -> Result<Vec<ContentItem>, ContentError> {
        Ok(self
            .list::<RawWork>("works")?
            .into_iter()
            .map(ContentItem::from)
            .collect())
    }

    /// Fetch the articles collection.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Http` on transport, status or decode failure.
    pub fn articles(&self) -> Result<Vec<ContentItem>, ContentError> {
        Ok(self
            .list::<RawArticle>("articles")?
            .into_iter()
            .map(ContentItem::from)
            .collect())
    }

    /// Fetch the career timeline.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Http` on transport, status or decode failure.
    pub fn careers(&self) -> Result<Vec<CareerEntry>, ContentError> {
        Ok(self
            .list::<RawCareer>("career")?
            .into_iter()
            .map(CareerEntry::from)
            .collect())
    }

    /// Works, or an empty collection if the fetch fails.
    ///
    /// Listing screens render an empty collection as a normal state; fetch
    /// errors stop at this boundary.
    #[must_use]
    pub fn works_or_empty(&self) -> Vec<ContentItem> {
        self.works().unwrap_or_else(|err| {
            warn!("failed to fetch works: {err}");
            Vec::new()
        })
    }

    /// Articles, or an empty collection if the fetch fails.
    #[must_use]
    pub fn articles_or_empty(&self) -> Vec<ContentItem> {
        self.articles().unwrap_or_else(|err| {
            warn!("failed to fetch articles: {err}");
            Vec::new()
        })
    }

    /// Career entries, or an empty collection if the fetch fails.
    #[must_use]
    pub fn careers_or_empty(&self) -> Vec<CareerEntry> {
        self.careers().unwrap_or_else(|err| {
            warn!("failed to fetch career entries: {err}");
            Vec::new()
        })
    }
}
