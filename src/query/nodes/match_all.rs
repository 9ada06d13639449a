//! Match-all and match-none queries

use crate::query::de::object_serde;
use serde::{Deserialize, Serialize};

/// A query that matches all documents
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct MatchAll {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
}

impl MatchAll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the constant score given to every document
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }
}

/// A query that matches no documents
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct MatchNone {}

object_serde!(MatchAll, MatchNone);

impl MatchNone {
    pub fn new() -> Self {
        Self {}
    }
}
