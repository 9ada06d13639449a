//! Request envelope types

pub mod search;
pub mod sort;
pub mod source;

pub use search::Search;
pub use sort::{Sort, SortEntry, SortSpec};
pub use source::{SourceFilter, SourceRules};
