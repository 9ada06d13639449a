//! Range query - matches documents with field values in a range

use crate::query::de::object_serde;
use crate::query::types::{FieldValue, RangeRelation};
use serde::{Deserialize, Serialize};

/// Clause matching field values within the given bounds
///
/// Bounds are not checked against each other; an empty or inverted range is
/// for the engine to reject.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Range {
    /// Greater than
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<FieldValue>,
    /// Greater than or equal to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<FieldValue>,
    /// Less than
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<FieldValue>,
    /// Less than or equal to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    /// Date format used to parse string bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<RangeRelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

object_serde!(Range);

impl Range {
    /// Create an unbounded range clause
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the greater-than bound
    pub fn with_gt(mut self, value: impl Into<FieldValue>) -> Self {
        self.gt = Some(value.into());
        self
    }

    /// Set the greater-than-or-equal bound
    pub fn with_gte(mut self, value: impl Into<FieldValue>) -> Self {
        self.gte = Some(value.into());
        self
    }

    /// Set the less-than bound
    pub fn with_lt(mut self, value: impl Into<FieldValue>) -> Self {
        self.lt = Some(value.into());
        self
    }

    /// Set the less-than-or-equal bound
    pub fn with_lte(mut self, value: impl Into<FieldValue>) -> Self {
        self.lte = Some(value.into());
        self
    }

    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_relation(mut self, relation: RangeRelation) -> Self {
        self.relation = Some(relation);
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }
}
