use crate::query::de::object_serde;
use serde::{Deserialize, Serialize};

/// Include/exclude patterns for source filtering
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self", deny_unknown_fields)]
pub struct SourceRules {
    #[serde(default, alias = "include", skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    #[serde(default, alias = "exclude", skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

object_serde!(SourceRules);

/// Source filtering: which parts of `_source` come back with each hit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceFilter {
    /// `true` returns the whole source, `false` none of it
    Enabled(bool),
    /// A single field or wildcard pattern
    Field(String),
    /// A list of fields or wildcard patterns
    Fields(Vec<String>),
    Rules(SourceRules),
    /// Any other shape the engine accepts, passed through untouched
    Raw(serde_json::Value),
}

impl SourceFilter {
    /// Build an include/exclude rule set
    pub fn rules<I, E, S, T>(includes: I, excludes: E) -> Self
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        SourceFilter::Rules(SourceRules {
            includes: includes.into_iter().map(Into::into).collect(),
            excludes: excludes.into_iter().map(Into::into).collect(),
        })
    }

    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SourceFilter::Fields(fields.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for SourceFilter {
    fn from(enabled: bool) -> Self {
        SourceFilter::Enabled(enabled)
    }
}

impl From<&str> for SourceFilter {
    fn from(field: &str) -> Self {
        SourceFilter::Field(field.to_string())
    }
}

impl From<Vec<String>> for SourceFilter {
    fn from(fields: Vec<String>) -> Self {
        SourceFilter::Fields(fields)
    }
}

impl From<SourceRules> for SourceFilter {
    fn from(rules: SourceRules) -> Self {
        SourceFilter::Rules(rules)
    }
}

impl From<serde_json::Value> for SourceFilter {
    fn from(value: serde_json::Value) -> Self {
        SourceFilter::Raw(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_filter_shapes() {
        assert_eq!(serde_json::to_value(SourceFilter::from(false)).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(SourceFilter::from("obj.*")).unwrap(), json!("obj.*"));
        assert_eq!(
            serde_json::to_value(SourceFilter::fields(["a", "b"])).unwrap(),
            json!(["a", "b"])
        );
        assert_eq!(
            serde_json::to_value(SourceFilter::rules(["obj1.*"], Vec::<String>::new())).unwrap(),
            json!({"includes": ["obj1.*"]})
        );
    }

    #[test]
    fn test_source_filter_decode_singular_keys() {
        let filter: SourceFilter =
            serde_json::from_value(json!({"include": ["a"], "exclude": ["b"]})).unwrap();
        assert_eq!(filter, SourceFilter::rules(["a"], ["b"]));
    }

    #[test]
    fn test_source_filter_unknown_object_kept_verbatim() {
        let doc = json!({"foo": ["a"]});
        let filter: SourceFilter = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(filter, SourceFilter::Raw(doc.clone()));
        assert_eq!(serde_json::to_value(&filter).unwrap(), doc);
    }

    #[test]
    fn test_source_filter_mixed_rules_fall_through() {
        let doc = json!({"includes": ["a"], "excludes_vectors": true});
        let filter: SourceFilter = serde_json::from_value(doc.clone()).unwrap();
        assert!(matches!(filter, SourceFilter::Raw(_)));
        assert_eq!(serde_json::to_value(&filter).unwrap(), doc);
    }
}
