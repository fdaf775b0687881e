use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::catalog::{CatalogVolume, UNKNOWN_GENRE};

/// A book the caller has read, identified by title.
///
/// Any other fields on the record are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookStub {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookStub {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A book stub shallow-merged with its catalog metadata.
///
/// Catalog fields win on key collisions. Without a catalog match the stub's
/// own fields are all there is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedBook {
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(skip)]
    enriched: bool,
}

impl EnrichedBook {
    pub fn new(stub: BookStub, volume: Option<&CatalogVolume>) -> Self {
        let mut fields = stub.extra;
        fields.insert("title".to_string(), Value::String(stub.title));

        let enriched = volume.is_some();
        if let Some(volume) = volume {
            fields.extend(volume.to_fields());
        }

        Self { fields, enriched }
    }

    pub fn title(&self) -> &str {
        self.fields
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Genre used for ranking; blank or missing genres count as "Unknown".
    pub fn genre(&self) -> &str {
        self.fields
            .get("genre")
            .and_then(Value::as_str)
            .filter(|genre| !genre.is_empty())
            .unwrap_or(UNKNOWN_GENRE)
    }

    /// Page count used for totals; anything that is not a non-negative integer counts as 0.
    pub fn pages(&self) -> u64 {
        self.fields
            .get("pages")
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    pub fn is_enriched(&self) -> bool {
        self.enriched
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
