//! Sort descriptors

use crate::query::de::object_serde;
use crate::query::types::{FieldValue, SortMode, SortOrder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-level sort options
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", deny_unknown_fields)]
pub struct Sort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Numeric type hint, e.g. `"date_nanos"`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<String>,
    /// Date format for date-typed fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SortMode>,
    /// `"_first"`, `"_last"` or a substitute value for documents missing the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmapped_type: Option<String>,
}

object_serde!(Sort);

impl Sort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_type(mut self, sort_type: impl Into<String>) -> Self {
        self.sort_type = Some(sort_type.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_mode(mut self, mode: SortMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_missing(mut self, missing: impl Into<FieldValue>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    pub fn with_unmapped_type(mut self, unmapped_type: impl Into<String>) -> Self {
        self.unmapped_type = Some(unmapped_type.into());
        self
    }
}

/// What a sort entry holds for a field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortSpec {
    /// Shorthand `{"field": "desc"}`
    Order(SortOrder),
    /// Full options object
    Options(Sort),
    /// Anything else the engine accepts, passed through untouched
    Raw(serde_json::Value),
}

impl From<SortOrder> for SortSpec {
    fn from(order: SortOrder) -> Self {
        SortSpec::Order(order)
    }
}

impl From<Sort> for SortSpec {
    fn from(sort: Sort) -> Self {
        SortSpec::Options(sort)
    }
}

impl From<serde_json::Value> for SortSpec {
    fn from(value: serde_json::Value) -> Self {
        SortSpec::Raw(value)
    }
}

/// One element of the `sort` array: field name to directive
pub type SortEntry = BTreeMap<String, SortSpec>;
