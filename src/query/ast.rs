//! Query node: the tree element every clause hangs off
//!
//! A [`Query`] holds at most one [`QueryClause`]. The clause slot sits behind
//! a per-node lock so that keyed collections (term, match, range) can be
//! filled from several threads through a shared `Arc<Query>`.

use parking_lot::Mutex;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::nodes::{Bool, Match, MatchAll, MatchNone, Range, Term};

/// The single clause held by a query node
///
/// Keyed variants map field names to the clause configured for that field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryClause {
    MatchAll(MatchAll),
    MatchNone(MatchNone),
    Bool(Bool),
    Term(BTreeMap<String, Term>),
    Match(BTreeMap<String, Match>),
    Range(BTreeMap<String, Range>),
}

/// Discriminant of a [`QueryClause`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    MatchAll,
    MatchNone,
    Bool,
    Term,
    Match,
    Range,
}

impl QueryKind {
    /// Wire key of the clause
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::MatchAll => "match_all",
            QueryKind::MatchNone => "match_none",
            QueryKind::Bool => "bool",
            QueryKind::Term => "term",
            QueryKind::Match => "match",
            QueryKind::Range => "range",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryClause {
    pub fn kind(&self) -> QueryKind {
        match self {
            QueryClause::MatchAll(_) => QueryKind::MatchAll,
            QueryClause::MatchNone(_) => QueryKind::MatchNone,
            QueryClause::Bool(_) => QueryKind::Bool,
            QueryClause::Term(_) => QueryKind::Term,
            QueryClause::Match(_) => QueryKind::Match,
            QueryClause::Range(_) => QueryKind::Range,
        }
    }

    /// Keyed collections with no fields carry nothing onto the wire
    fn is_vacant(&self) -> bool {
        match self {
            QueryClause::Term(fields) => fields.is_empty(),
            QueryClause::Match(fields) => fields.is_empty(),
            QueryClause::Range(fields) => fields.is_empty(),
            _ => false,
        }
    }
}

/// A node in the query tree
///
/// Setting a clause of one kind replaces a clause of any other kind, so a
/// node can never carry two kinds at once. Keyed setters (`set_term`,
/// `set_match`, `set_range`) add to the collection already present, creating
/// it on first use; a repeated field name overwrites the earlier entry.
///
/// Every `set_*` method takes `&self` and locks the node for the duration of
/// the call, which makes concurrent insertion of distinct fields lossless.
/// The `with_*` methods are by-value equivalents for single-threaded
/// building.
#[derive(Debug, Default)]
pub struct Query {
    clause: Mutex<Option<QueryClause>>,
}

impl Query {
    /// Create an empty query node
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_clause(clause: QueryClause) -> Self {
        Self {
            clause: Mutex::new(Some(clause)),
        }
    }

    fn replace(&self, clause: QueryClause) {
        let mut slot = self.clause.lock();
        if let Some(previous) = slot.as_ref() {
            if previous.kind() != clause.kind() {
                debug!(from = %previous.kind(), to = %clause.kind(), "replacing query clause");
            }
        }
        *slot = Some(clause);
    }

    pub fn set_match_all(&self, match_all: MatchAll) -> &Self {
        self.replace(QueryClause::MatchAll(match_all));
        self
    }

    pub fn set_match_none(&self, match_none: MatchNone) -> &Self {
        self.replace(QueryClause::MatchNone(match_none));
        self
    }

    pub fn set_bool(&self, bool_query: Bool) -> &Self {
        self.replace(QueryClause::Bool(bool_query));
        self
    }

    /// Add or overwrite the term clause for `field`
    pub fn set_term(&self, field: impl Into<String>, term: Term) -> &Self {
        let field = field.into();
        let mut slot = self.clause.lock();
        match slot.as_mut() {
            Some(QueryClause::Term(fields)) => {
                fields.insert(field, term);
            }
            other => {
                if let Some(previous) = other {
                    debug!(from = %previous.kind(), to = "term", "replacing query clause");
                }
                *slot = Some(QueryClause::Term(BTreeMap::from([(field, term)])));
            }
        }
        self
    }

    /// Add or overwrite the match clause for `field`
    pub fn set_match(&self, field: impl Into<String>, clause: Match) -> &Self {
        let field = field.into();
        let mut slot = self.clause.lock();
        match slot.as_mut() {
            Some(QueryClause::Match(fields)) => {
                fields.insert(field, clause);
            }
            other => {
                if let Some(previous) = other {
                    debug!(from = %previous.kind(), to = "match", "replacing query clause");
                }
                *slot = Some(QueryClause::Match(BTreeMap::from([(field, clause)])));
            }
        }
        self
    }

    /// Add or overwrite the range clause for `field`
    pub fn set_range(&self, field: impl Into<String>, range: Range) -> &Self {
        let field = field.into();
        let mut slot = self.clause.lock();
        match slot.as_mut() {
            Some(QueryClause::Range(fields)) => {
                fields.insert(field, range);
            }
            other => {
                if let Some(previous) = other {
                    debug!(from = %previous.kind(), to = "range", "replacing query clause");
                }
                *slot = Some(QueryClause::Range(BTreeMap::from([(field, range)])));
            }
        }
        self
    }

    pub fn with_match_all(self, match_all: MatchAll) -> Self {
        self.set_match_all(match_all);
        self
    }

    pub fn with_match_none(self, match_none: MatchNone) -> Self {
        self.set_match_none(match_none);
        self
    }

    pub fn with_bool(self, bool_query: Bool) -> Self {
        self.set_bool(bool_query);
        self
    }

    pub fn with_term(self, field: impl Into<String>, term: Term) -> Self {
        self.set_term(field, term);
        self
    }

    pub fn with_match(self, field: impl Into<String>, clause: Match) -> Self {
        self.set_match(field, clause);
        self
    }

    pub fn with_range(self, field: impl Into<String>, range: Range) -> Self {
        self.set_range(field, range);
        self
    }

    /// Kind of the clause currently held, if any
    pub fn kind(&self) -> Option<QueryKind> {
        self.clause.lock().as_ref().map(QueryClause::kind)
    }

    /// Whether the node would encode as `{}`
    pub fn is_empty(&self) -> bool {
        self.clause.lock().as_ref().map_or(true, QueryClause::is_vacant)
    }

    /// Snapshot of the current clause
    pub fn clause(&self) -> Option<QueryClause> {
        self.clause.lock().clone()
    }

    /// Take the clause out, leaving the node empty
    pub fn into_clause(self) -> Option<QueryClause> {
        self.clause.into_inner()
    }

    pub fn term(&self, field: &str) -> Option<Term> {
        match self.clause.lock().as_ref() {
            Some(QueryClause::Term(fields)) => fields.get(field).cloned(),
            _ => None,
        }
    }

    pub fn match_clause(&self, field: &str) -> Option<Match> {
        match self.clause.lock().as_ref() {
            Some(QueryClause::Match(fields)) => fields.get(field).cloned(),
            _ => None,
        }
    }

    pub fn range(&self, field: &str) -> Option<Range> {
        match self.clause.lock().as_ref() {
            Some(QueryClause::Range(fields)) => fields.get(field).cloned(),
            _ => None,
        }
    }

    /// Number of fields in a keyed clause; zero for every other kind
    pub fn field_count(&self) -> usize {
        match self.clause.lock().as_ref() {
            Some(QueryClause::Term(fields)) => fields.len(),
            Some(QueryClause::Match(fields)) => fields.len(),
            Some(QueryClause::Range(fields)) => fields.len(),
            _ => 0,
        }
    }
}

impl Clone for Query {
    fn clone(&self) -> Self {
        Self {
            clause: Mutex::new(self.clause()),
        }
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        // The lock is not reentrant.
        if std::ptr::eq(self, other) {
            return true;
        }
        self.clause() == other.clause()
    }
}

impl From<QueryClause> for Query {
    fn from(clause: QueryClause) -> Self {
        Self::from_clause(clause)
    }
}

impl From<Bool> for Query {
    fn from(bool_query: Bool) -> Self {
        Self::from_clause(QueryClause::Bool(bool_query))
    }
}

impl From<MatchAll> for Query {
    fn from(match_all: MatchAll) -> Self {
        Self::from_clause(QueryClause::MatchAll(match_all))
    }
}

impl From<MatchNone> for Query {
    fn from(match_none: MatchNone) -> Self {
        Self::from_clause(QueryClause::MatchNone(match_none))
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let slot = self.clause.lock();
        match slot.as_ref() {
            Some(clause) if !clause.is_vacant() => clause.serialize(serializer),
            _ => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Decoding shape: every kind as an optional key
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QueryRepr {
    match_all: Option<MatchAll>,
    match_none: Option<MatchNone>,
    #[serde(rename = "bool")]
    bool_query: Option<Bool>,
    term: Option<BTreeMap<String, Term>>,
    #[serde(rename = "match")]
    match_query: Option<BTreeMap<String, Match>>,
    range: Option<BTreeMap<String, Range>>,
}

impl QueryRepr {
    fn into_query<E: de::Error>(self) -> Result<Query, E> {
        let mut clauses: Vec<QueryClause> = [
            self.match_all.map(QueryClause::MatchAll),
            self.match_none.map(QueryClause::MatchNone),
            self.bool_query.map(QueryClause::Bool),
            self.term.map(QueryClause::Term),
            self.match_query.map(QueryClause::Match),
            self.range.map(QueryClause::Range),
        ]
        .into_iter()
        .flatten()
        .collect();

        match clauses.len() {
            0 => Ok(Query::new()),
            1 => Ok(clauses.pop().map(Query::from_clause).unwrap_or_default()),
            _ => {
                let kinds: Vec<&str> = clauses.iter().map(|c| c.kind().as_str()).collect();
                Err(E::custom(format!(
                    "query must hold a single clause kind, got: {}",
                    kinds.join(", ")
                )))
            }
        }
    }
}

/// Accepts only a JSON object; positional arrays are a shape error
struct QueryVisitor;

impl<'de> Visitor<'de> for QueryVisitor {
    type Value = Query;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a query object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Query, A::Error> {
        QueryRepr::deserialize(MapAccessDeserializer::new(map))?.into_query()
    }
}

impl<'de> Deserialize<'de> for Query {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(QueryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_query_encodes_empty_object() {
        let q = Query::new();
        assert!(q.is_empty());
        assert_eq!(q.kind(), None);
        assert_eq!(serde_json::to_string(&q).unwrap(), "{}");
    }

    #[test]
    fn test_match_all_query() {
        let q = Query::new().with_match_all(MatchAll::new());
        assert_eq!(q.kind(), Some(QueryKind::MatchAll));
        assert_eq!(serde_json::to_value(&q).unwrap(), json!({"match_all": {}}));
    }

    #[test]
    fn test_match_none_query() {
        let q: Query = MatchNone::new().into();
        assert_eq!(serde_json::to_value(&q).unwrap(), json!({"match_none": {}}));
    }

    #[test]
    fn test_term_overwrite_same_field() {
        let q = Query::new();
        q.set_term("f", Term::new("a")).set_term("f", Term::new("b"));
        assert_eq!(q.field_count(), 1);
        assert_eq!(q.term("f"), Some(Term::new("b")));
    }

    #[test]
    fn test_term_distinct_fields_survive() {
        let q = Query::new()
            .with_term("f2", Term::new("two"))
            .with_term("f1", Term::new("one"));
        assert_eq!(q.field_count(), 2);
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({"term": {"f1": {"value": "one"}, "f2": {"value": "two"}}})
        );
    }

    #[test]
    fn test_switching_kind_replaces_clause() {
        let q = Query::new()
            .with_match_all(MatchAll::new())
            .with_term("status", Term::new("active"));
        assert_eq!(q.kind(), Some(QueryKind::Term));
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({"term": {"status": {"value": "active"}}})
        );

        q.set_bool(Bool::new());
        assert_eq!(q.term("status"), None);
        assert_eq!(serde_json::to_value(&q).unwrap(), json!({"bool": {}}));
    }

    #[test]
    fn test_match_and_range_collections() {
        let q = Query::new().with_match("title", Match::new("rust"));
        assert_eq!(q.match_clause("title"), Some(Match::new("rust")));
        assert_eq!(q.range("title"), None);

        let r = Query::new().with_range("year", Range::new().with_gte(2020));
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"range": {"year": {"gte": 2020}}})
        );
    }

    #[test]
    fn test_vacant_collection_encodes_empty() {
        let q = Query::from_clause(QueryClause::Term(BTreeMap::new()));
        assert!(q.is_empty());
        assert_eq!(q.kind(), Some(QueryKind::Term));
        assert_eq!(serde_json::to_string(&q).unwrap(), "{}");
    }

    #[test]
    fn test_query_self_equality() {
        let q = Query::new().with_term("a", Term::new("b"));
        assert_eq!(q, q);
        assert_eq!(q, q.clone());
    }

    #[test]
    fn test_decode_single_kind() {
        let q: Query = serde_json::from_value(json!({"term": {"user": {"value": "kimchy"}}})).unwrap();
        assert_eq!(q.term("user"), Some(Term::new("kimchy")));

        let empty: Query = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_decode_rejects_multiple_kinds() {
        let err = serde_json::from_value::<Query>(json!({"match_all": {}, "bool": {}})).unwrap_err();
        assert!(err.to_string().contains("single clause kind"));
    }

    #[test]
    fn test_decode_rejects_positional_array() {
        let doc = json!([null, null, null, {"f": {"value": "x"}}, null, null]);
        let err = serde_json::from_value::<Query>(doc).unwrap_err();
        assert!(err.to_string().contains("a query object"));

        let nested = json!({"term": {"f": ["x", 1.5, true]}});
        assert!(serde_json::from_value::<Query>(nested).is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_kind() {
        assert!(serde_json::from_value::<Query>(json!({"wildcard": {"f": {"value": "a*"}}})).is_err());
    }
}
