//! Match query - full-text search with analysis

use crate::query::de::object_serde;
use crate::query::types::{FieldValue, MatchOperator, MinimumShouldMatch, ZeroTermsQuery};
use serde::{Deserialize, Serialize};

/// Clause performing full-text search on a field
///
/// The engine analyzes `query` with the field's analyzer (or `analyzer`, when
/// set) and combines the resulting terms using `operator`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Match {
    /// Text, number, boolean or date to search for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<MatchOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_transpositions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<u32>,
    /// Ignore format-based errors such as text sent to a numeric field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_terms_query: Option<ZeroTermsQuery>,
    /// Maximum edit distance, e.g. `"AUTO"` or `"2"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzziness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<MinimumShouldMatch>,
    /// Analyzer to use instead of the field's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
}

object_serde!(Match);

impl Match {
    /// Create a new match clause for the given query text
    pub fn new(query: impl Into<FieldValue>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<FieldValue>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set how analyzed terms are combined
    pub fn with_operator(mut self, operator: MatchOperator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn with_fuzzy_transpositions(mut self, enabled: bool) -> Self {
        self.fuzzy_transpositions = Some(enabled);
        self
    }

    pub fn with_fuzzy_rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.fuzzy_rewrite = Some(rewrite.into());
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    pub fn with_zero_terms_query(mut self, zero_terms: ZeroTermsQuery) -> Self {
        self.zero_terms_query = Some(zero_terms);
        self
    }

    pub fn with_fuzziness(mut self, fuzziness: impl Into<String>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    /// Set the number of leading characters left unchanged for fuzzy matching
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    /// Set minimum should match
    pub fn with_minimum_should_match(mut self, msm: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(msm.into());
        self
    }

    /// Set the analyzer
    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }
}
