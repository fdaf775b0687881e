use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::errors::CatalogError;

/// Genre reported when the catalog has no category for a volume.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Metadata the catalog holds for a single volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVolume {
    pub title: String,
    pub authors: Vec<String>,
    pub genre: String,
    pub pages: u32,
    pub thumbnail: String,
}

impl CatalogVolume {
    /// The volume as the JSON fields it contributes when merged into a book stub.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("title".to_string(), json!(self.title));
        fields.insert("authors".to_string(), json!(self.authors));
        fields.insert("genre".to_string(), json!(self.genre));
        fields.insert("pages".to_string(), json!(self.pages));
        fields.insert("thumbnail".to_string(), json!(self.thumbnail));
        fields
    }
}

/// A free-text search result, cleaned into the shape stored on a reading list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSearchHit {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub thumbnail: String,
}

/// Result of resolving a title against the catalog.
///
/// `NoMatch` and `Failed` look the same to aggregation; they are kept apart so
/// callers and logs can tell an empty result from a broken request.
#[derive(Debug)]
pub enum LookupOutcome {
    Found(CatalogVolume),
    NoMatch,
    Failed(CatalogError),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_volume(self) -> Option<CatalogVolume> {
        match self {
            Self::Found(volume) => Some(volume),
            Self::NoMatch | Self::Failed(_) => None,
        }
    }
}

/// Resolves a book title to catalog metadata.
///
/// Implementations never fail: every error is reported as
/// [`LookupOutcome::Failed`].
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn lookup(&self, title: &str) -> LookupOutcome;
}
