use serde::{Deserialize, Serialize};

use super::sort::{SortEntry, SortSpec};
use super::source::SourceFilter;
use crate::query::de::object_serde;
use crate::query::{Query, RequestCodec};
use crate::Result;

/// Search request body
///
/// The top-level document sent to the engine's `_search` endpoint. Every
/// part is optional; unset parts are left out of the encoded body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Search {
    /// Number of hits to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Offset of the first hit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceFilter>,
}

object_serde!(Search);

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_from(mut self, from: usize) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_source(mut self, source: impl Into<SourceFilter>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Append a sort entry
    pub fn sort(mut self, entry: SortEntry) -> Self {
        self.sort.push(entry);
        self
    }

    /// Append a single-field sort entry
    pub fn sort_by(self, field: impl Into<String>, spec: impl Into<SortSpec>) -> Self {
        self.sort(SortEntry::from([(field.into(), spec.into())]))
    }

    /// Encode as compact JSON
    pub fn to_json(&self) -> Result<String> {
        RequestCodec::default().encode(self)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        RequestCodec::default().encode_value(self)
    }

    /// Decode a request body
    pub fn from_json(json: &str) -> Result<Self> {
        RequestCodec::default().decode_str(json)
    }
}
