//! Query DSL object model
//!
//! Typed clauses that serialize to the Elasticsearch query DSL:
//! - Boolean queries (must, must_not, should, filter)
//! - Term queries (exact match)
//! - Match queries (full-text search)
//! - Range queries (numeric/date ranges)
//! - Match-all and match-none queries
//!
//! # Example
//!
//! ```rust
//! use squidex_dsl::query::{Bool, MatchAll, Query, Term};
//!
//! let query = Query::new().with_bool(
//!     Bool::new()
//!         .must(Query::new().with_term("status", Term::new("active")))
//!         .with_filter(Query::new().with_match_all(MatchAll::new())),
//! );
//!
//! assert_eq!(
//!     serde_json::to_string(&query).unwrap(),
//!     r#"{"bool":{"must":[{"term":{"status":{"value":"active"}}}],"filter":{"match_all":{}}}}"#
//! );
//! ```

pub mod ast;
pub mod builder;
pub mod codec;
pub(crate) mod de;
pub mod nodes;
pub mod types;

pub use ast::{Query, QueryClause, QueryKind};
pub use builder::Configure;
pub use codec::RequestCodec;
pub use nodes::{Bool, Match, MatchAll, MatchNone, Range, Term};
pub use types::*;
