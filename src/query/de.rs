//! Object-only serde impls for the request model
//!
//! Derived struct deserializers also read a sequence by field position, so
//! `["x", 1.5]` would decode as a `Term`. Every type in the model is a JSON
//! object on the wire; types passed to [`object_serde!`] derive with
//! `#[serde(remote = "Self")]` and get trait impls that only accept maps.

/// Implement `Serialize` and a map-only `Deserialize` on top of the
/// inherent functions generated by `#[serde(remote = "Self")]`
macro_rules! object_serde {
    ($($ty:ident),+ $(,)?) => {$(
        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $ty::serialize(self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct ObjectVisitor;

                impl<'de> ::serde::de::Visitor<'de> for ObjectVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str(concat!("a ", stringify!($ty), " object"))
                    }

                    fn visit_map<A>(self, map: A) -> ::std::result::Result<$ty, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        $ty::deserialize(::serde::de::value::MapAccessDeserializer::new(map))
                    }
                }

                deserializer.deserialize_map(ObjectVisitor)
            }
        }
    )+};
}

pub(crate) use object_serde;

#[cfg(test)]
mod tests {
    use crate::query::{Bool, Match, MatchAll, MatchNone, Range, Term};
    use serde_json::json;

    #[test]
    fn test_positional_arrays_rejected() {
        assert!(serde_json::from_str::<Term>(r#"["x", 1.5, true]"#).is_err());
        assert!(serde_json::from_value::<Range>(json!([1, 2, 3, 4])).is_err());
        assert!(serde_json::from_value::<Match>(json!(["text"])).is_err());
        assert!(serde_json::from_value::<MatchAll>(json!([1.0])).is_err());
        assert!(serde_json::from_value::<MatchNone>(json!([])).is_err());
        assert!(serde_json::from_value::<Bool>(json!([[], [], [], null, null, null])).is_err());
    }

    #[test]
    fn test_error_names_expected_object() {
        let err = serde_json::from_str::<Term>(r#"["x"]"#).unwrap_err();
        assert!(err.to_string().contains("a Term object"));
    }

    #[test]
    fn test_objects_still_decode() {
        let term: Term = serde_json::from_str(r#"{"value": "x", "boost": 1.5}"#).unwrap();
        assert_eq!(term, Term::new("x").with_boost(1.5));
        let none: MatchNone = serde_json::from_str("{}").unwrap();
        assert_eq!(none, MatchNone::new());
    }
}
