//! Name matching utilities
//!
//! - `%` wildcard matching with a compiled-pattern cache
//! - order-preserving, set-semantics list merging

pub mod dedup;
pub mod wildcard;

pub use dedup::add_unique;
pub use wildcard::{WILDCARD, WildcardMatcher, is_wildcard, matches_wildcard};
