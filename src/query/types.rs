//! Core value types shared by clauses and the request envelope

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Declares a string-backed wire value with a set of known constants.
///
/// The generated type accepts any string: the constants are the vocabulary
/// this crate models, but values the engine understands and we don't are
/// decoded and re-encoded untouched.
macro_rules! wire_value {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$cmeta:meta])* $konst:ident = $lit:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$cmeta])*
                pub const $konst: Self = Self(Cow::Borrowed($lit));
            )+

            /// Wire strings with a named constant
            pub const KNOWN: &'static [&'static str] = &[$($lit),+];

            /// Wrap an arbitrary wire string
            pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the value is one of the named constants
            pub fn is_known(&self) -> bool {
                Self::KNOWN.iter().any(|known| *known == self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&'static str> for $name {
            fn from(value: &'static str) -> Self {
                Self(Cow::Borrowed(value))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(|s| Self(Cow::Owned(s)))
            }
        }
    };
}

wire_value! {
    /// How a range query treats range-typed fields
    RangeRelation {
        INTERSECTS = "INTERSECTS",
        CONTAINS = "CONTAINS",
        WITHIN = "WITHIN",
    }
}

wire_value! {
    /// Operator for combining analyzed terms in a match query
    MatchOperator {
        /// At least one term must match
        OR = "OR",
        /// All terms must match
        AND = "AND",
    }
}

wire_value! {
    /// What a match query returns when analysis removes every token
    ZeroTermsQuery {
        ALL = "all",
        /// Lowercase, as the engine documents it; `"None"` is not a
        /// spelling the match query recognises
        NONE = "none",
    }
}

wire_value! {
    SortOrder {
        ASC = "asc",
        DESC = "desc",
    }
}

wire_value! {
    /// Which value of a multi-valued field is used for sorting
    SortMode {
        MIN = "min",
        MAX = "max",
        SUM = "sum",
        AVG = "avg",
        MEDIAN = "median",
    }
}

/// Operand for range bounds and match queries
///
/// Encodes as the bare JSON scalar. JSON has no NaN or infinity: a
/// non-finite `Double` encodes as `null`, which does not decode back into a
/// `FieldValue`. Send such bounds as strings if the engine should see them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    /// 64-bit integer
    Long(i64),
    /// 64-bit floating point
    Double(f64),
    /// String (for text, dates, keywords)
    String(String),
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Long(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Long(v.into())
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Long(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Double(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

/// Minimum should match configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    /// Exact count
    Count(i64),
    /// Percentage or combination spec (e.g., "75%", "3<90%")
    Spec(String),
}

impl From<i64> for MinimumShouldMatch {
    fn from(n: i64) -> Self {
        MinimumShouldMatch::Count(n)
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(s: &str) -> Self {
        MinimumShouldMatch::Spec(s.to_string())
    }
}

impl From<String> for MinimumShouldMatch {
    fn from(s: String) -> Self {
        MinimumShouldMatch::Spec(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_value_encodes_bare_string() {
        let encoded = serde_json::to_string(&RangeRelation::WITHIN).unwrap();
        assert_eq!(encoded, "\"WITHIN\"");
        assert_eq!(serde_json::to_value(SortOrder::DESC).unwrap(), json!("desc"));
    }

    #[test]
    fn test_wire_value_known_constants_decode() {
        for lit in SortMode::KNOWN {
            let decoded: SortMode = serde_json::from_value(json!(lit)).unwrap();
            assert_eq!(decoded.as_str(), *lit);
            assert!(decoded.is_known());
        }
        let op: MatchOperator = serde_json::from_str("\"AND\"").unwrap();
        assert_eq!(op, MatchOperator::AND);
    }

    #[test]
    fn test_wire_value_preserves_unknown() {
        let relation: RangeRelation = serde_json::from_str("\"DISJOINT\"").unwrap();
        assert!(!relation.is_known());
        assert_eq!(relation.to_string(), "DISJOINT");
        assert_eq!(serde_json::to_string(&relation).unwrap(), "\"DISJOINT\"");
    }

    #[test]
    fn test_wire_value_rejects_non_string() {
        assert!(serde_json::from_str::<ZeroTermsQuery>("1").is_err());
        assert!(serde_json::from_str::<ZeroTermsQuery>("null").is_err());
        assert!(serde_json::from_str::<ZeroTermsQuery>("[\"all\"]").is_err());
    }

    #[test]
    fn test_wire_value_owned_equals_constant() {
        assert_eq!(SortOrder::from("asc".to_string()), SortOrder::ASC);
        assert_eq!(SortOrder::new("asc"), SortOrder::ASC);
        assert_ne!(SortOrder::new("ASC"), SortOrder::ASC);
    }

    #[test]
    fn test_field_value_scalars() {
        assert_eq!(serde_json::to_value(FieldValue::from(10)).unwrap(), json!(10));
        assert_eq!(serde_json::to_value(FieldValue::from(2.5)).unwrap(), json!(2.5));
        assert_eq!(serde_json::to_value(FieldValue::from("now-1d")).unwrap(), json!("now-1d"));

        let decoded: FieldValue = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(decoded, FieldValue::Long(7));
        let decoded: FieldValue = serde_json::from_value(json!(0.5)).unwrap();
        assert_eq!(decoded, FieldValue::Double(0.5));
        let decoded: FieldValue = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(decoded, FieldValue::Bool(true));
    }

    #[test]
    fn test_non_finite_double_encodes_null() {
        let encoded = serde_json::to_string(&FieldValue::Double(f64::NAN)).unwrap();
        assert_eq!(encoded, "null");
        assert!(serde_json::from_str::<FieldValue>(&encoded).is_err());
        assert_eq!(
            serde_json::to_value(FieldValue::Double(f64::INFINITY)).unwrap(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_minimum_should_match_forms() {
        assert_eq!(serde_json::to_value(MinimumShouldMatch::from(2)).unwrap(), json!(2));
        let decoded: MinimumShouldMatch = serde_json::from_value(json!("75%")).unwrap();
        assert_eq!(decoded, MinimumShouldMatch::Spec("75%".to_string()));
    }
}
