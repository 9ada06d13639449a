//! Boolean query - combines multiple clauses with AND, OR, NOT semantics

use crate::query::ast::Query;
use crate::query::de::object_serde;
use crate::query::types::MinimumShouldMatch;
use serde::{Deserialize, Serialize};

/// Boolean query combining multiple clauses
///
/// - `must`: All clauses must match (AND). Contributes to score.
/// - `should`: At least one clause should match (OR). Contributes to score.
/// - `must_not`: No clause must match (NOT). Does not contribute to score.
/// - `filter`: A single clause that must match without scoring.
///
/// Clause lists keep insertion order and are append-only.
///
/// # Example
///
/// ```json
/// {
///   "bool": {
///     "must": [
///       { "match": { "content": { "query": "rust programming" } } }
///     ],
///     "must_not": [
///       { "term": { "status": { "value": "draft" } } }
///     ],
///     "filter": { "range": { "created_at": { "gte": "2024-01-01" } } }
///   }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Bool {
    /// Clauses that must match (AND, scoring)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<Query>,
    /// Clauses that must not match (NOT, no scoring)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<Query>,
    /// Clauses where at least one should match (OR, scoring)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<Query>,
    /// Clause that must match (no scoring)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Box<Query>>,
    /// Minimum number of should clauses that must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<MinimumShouldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
}

object_serde!(Bool);

impl Bool {
    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a must clause
    pub fn must(mut self, query: Query) -> Self {
        self.must.push(query);
        self
    }

    /// Add a must_not clause
    pub fn must_not(mut self, query: Query) -> Self {
        self.must_not.push(query);
        self
    }

    /// Add a should clause
    pub fn should(mut self, query: Query) -> Self {
        self.should.push(query);
        self
    }

    /// Set the filter clause, replacing any previous one
    pub fn with_filter(mut self, query: Query) -> Self {
        self.filter = Some(Box::new(query));
        self
    }

    /// Set minimum should match
    pub fn with_minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    /// Set boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Whether no clause of any kind has been added
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.must_not.is_empty()
            && self.should.is_empty()
            && self.filter.is_none()
    }

    /// Total number of sub-queries across all occurrence types
    pub fn clause_count(&self) -> usize {
        self.must.len() + self.must_not.len() + self.should.len() + usize::from(self.filter.is_some())
    }
}
