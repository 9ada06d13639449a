//! Term query - exact match on a field

use crate::query::de::object_serde;
use serde::{Deserialize, Serialize};

/// Clause matching documents that contain an exact term in a field
///
/// The field name is not part of the clause; it is the key under which the
/// clause is stored in a [`Query`](crate::query::Query).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Term {
    /// Exact term to match
    #[serde(default)]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

object_serde!(Term);

impl Term {
    /// Create a new term clause
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set ASCII case-insensitive matching; `false` is sent explicitly
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Configure;
    use serde_json::json;

    #[test]
    fn test_term_creation() {
        let term = Term::new("rust");
        assert_eq!(term.value, "rust");
        assert_eq!(term.boost, None);
        assert_eq!(serde_json::to_value(&term).unwrap(), json!({"value": "rust"}));
    }

    #[test]
    fn test_term_with_boost() {
        let term = Term::new("rust").with_boost(2.5);
        assert_eq!(
            serde_json::to_value(&term).unwrap(),
            json!({"value": "rust", "boost": 2.5})
        );
    }

    #[test]
    fn test_term_case_sensitive_false_is_emitted() {
        let term = Term::new("Rust").with_case_sensitive(false);
        assert_eq!(
            serde_json::to_value(&term).unwrap(),
            json!({"value": "Rust", "case_sensitive": false})
        );
    }

    #[test]
    fn test_term_value_always_present() {
        assert_eq!(serde_json::to_value(Term::default()).unwrap(), json!({"value": ""}));
    }

    #[test]
    fn test_term_build_options() {
        let term = Term::build([
            (|t: &mut Term| t.value = "draft".into()) as fn(&mut Term),
            |t: &mut Term| t.case_sensitive = Some(true),
        ]);
        assert_eq!(term, Term::new("draft").with_case_sensitive(true));
    }

    #[test]
    fn test_term_decode() {
        let term: Term =
            serde_json::from_value(json!({"value": "x", "boost": 1.5, "case_sensitive": true}))
                .unwrap();
        assert_eq!(term, Term::new("x").with_boost(1.5).with_case_sensitive(true));
        assert!(serde_json::from_value::<Term>(json!({"value": 3})).is_err());
    }
}
