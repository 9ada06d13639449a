//! Encoding requests to, and decoding them from, query-DSL JSON

use crate::config::EncodeSettings;
use crate::error::DslError;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

/// Converts clauses and requests to and from their JSON documents
///
/// Works on any type in the model, from a single [`Term`](crate::Term) up to
/// a whole [`Search`](crate::Search).
#[derive(Clone, Debug, Default)]
pub struct RequestCodec {
    settings: EncodeSettings,
}

impl RequestCodec {
    pub fn new(settings: EncodeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EncodeSettings {
        &self.settings
    }

    /// Encode to a JSON string
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let encoded = if self.settings.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(DslError::Serialization)?;
        trace!(bytes = encoded.len(), pretty = self.settings.pretty, "encoded request");
        Ok(encoded)
    }

    /// Encode to a JSON document tree
    pub fn encode_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value> {
        serde_json::to_value(value).map_err(DslError::Serialization)
    }

    /// Decode from a JSON string
    pub fn decode_str<T: DeserializeOwned>(&self, json: &str) -> Result<T> {
        serde_json::from_str(json).map_err(|e| {
            debug!(error = %e, "failed to decode request");
            DslError::Decode(e)
        })
    }

    /// Decode from a JSON document tree
    pub fn decode_value<T: DeserializeOwned>(&self, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(|e| {
            debug!(error = %e, "failed to decode request");
            DslError::Decode(e)
        })
    }
}
