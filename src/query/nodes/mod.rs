//! Concrete clause types
//!
//! Leaf clauses (term, range, match, match-all, match-none) and the
//! composite bool clause.

mod bool_query;
mod match_all;
mod match_query;
mod range_query;
mod term_query;

pub use bool_query::Bool;
pub use match_all::{MatchAll, MatchNone};
pub use match_query::Match;
pub use range_query::Range;
pub use term_query::Term;
