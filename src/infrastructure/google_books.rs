use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::application::config::CatalogConfig;
use crate::domain::catalog::{
    CatalogLookup, CatalogSearchHit, CatalogVolume, LookupOutcome, UNKNOWN_GENRE,
};
use crate::domain::errors::CatalogError;

pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/120x160?text=No+Image";
const USER_AGENT: &str = "shelfstats/1.0";
const UNTITLED: &str = "Untitled";

/// Google Books volumes search, used as the book catalog.
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    http: Client,
    base_url: Url,
    request_timeout: Option<Duration>,
}

impl GoogleBooksClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(CatalogError::transport)?;

        Ok(Self {
            http,
            base_url,
            request_timeout: config.request_timeout,
        })
    }

    /// Resolve a title to the first matching volume, if any.
    pub async fn lookup_title(&self, title: &str) -> Result<Option<CatalogVolume>, CatalogError> {
        let response = self.fetch_volumes(&format!("intitle:{title}")).await?;

        Ok(response
            .items
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|item| item.volume_info)
            .map(VolumeInfo::into_volume))
    }

    /// Free-text search across titles, authors and ISBNs.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogSearchHit>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let response = self.fetch_volumes(query).await?;

        Ok(response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(VolumeItem::into_search_hit)
            .collect())
    }

    async fn fetch_volumes(&self, query: &str) -> Result<VolumesResponse, CatalogError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("q", query);

        let mut request = self.http.get(url);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(CatalogError::transport)?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(CatalogError::transport)?;
        serde_json::from_str(&body).map_err(CatalogError::decode)
    }
}

#[async_trait]
impl CatalogLookup for GoogleBooksClient {
    async fn lookup(&self, title: &str) -> LookupOutcome {
        if title.trim().is_empty() {
            debug!("skipping catalog lookup for blank title");
            return LookupOutcome::NoMatch;
        }

        match self.lookup_title(title).await {
            Ok(Some(volume)) => LookupOutcome::Found(volume),
            Ok(None) => {
                debug!(title, "no catalog match");
                LookupOutcome::NoMatch
            }
            Err(err) => {
                warn!(title, error = %err, "catalog lookup failed");
                LookupOutcome::Failed(err)
            }
        }
    }
}

// --- Google Books API types ---

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<VolumeItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeItem {
    #[serde(default)]
    id: String,
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    categories: Option<Vec<String>>,
    page_count: Option<i64>,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

impl VolumeInfo {
    fn thumbnail(&self) -> Option<String> {
        self.image_links
            .as_ref()
            .and_then(|links| links.thumbnail.clone())
            .filter(|url| !url.is_empty())
    }

    fn into_volume(self) -> CatalogVolume {
        let thumbnail = self.thumbnail().unwrap_or_default();
        let genre = self
            .categories
            .and_then(|categories| categories.into_iter().next())
            .filter(|genre| !genre.is_empty())
            .unwrap_or_else(|| UNKNOWN_GENRE.to_string());

        CatalogVolume {
            title: self.title.unwrap_or_default(),
            authors: self.authors.unwrap_or_default(),
            genre,
            pages: self
                .page_count
                .and_then(|pages| u32::try_from(pages).ok())
                .unwrap_or(0),
            thumbnail,
        }
    }
}

impl VolumeItem {
    fn into_search_hit(self) -> CatalogSearchHit {
        let info = self.volume_info.unwrap_or_default();
        let thumbnail = info
            .thumbnail()
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

        CatalogSearchHit {
            id: self.id,
            title: info
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            authors: info.authors.unwrap_or_default(),
            thumbnail,
        }
    }
}
