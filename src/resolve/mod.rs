//! Relation resolution
//!
//! Turns relation patterns into concrete parent-to-child relations:
//!
//! 1. each pattern's parent is validated against the schema
//! 2. child and ignore entries expand across every table and column they match
//! 3. relations are merged in first-seen order without duplicates
//! 4. ignored relations and parent-to-itself edges are removed

mod resolver;

pub use resolver::{IgnoreMatch, RelationResolver, find_relations, find_relations_from_patterns};
