pub mod config;
pub mod error;
pub mod models;
pub mod query;

pub use config::EncodeSettings;
pub use error::{DslError, Result};
pub use models::{Search, Sort, SortEntry, SortSpec, SourceFilter, SourceRules};
pub use query::{
    Bool, Configure, FieldValue, Match, MatchAll, MatchNone, MatchOperator, MinimumShouldMatch,
    Query, QueryClause, QueryKind, Range, RangeRelation, RequestCodec, SortMode, SortOrder, Term,
    ZeroTermsQuery,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
