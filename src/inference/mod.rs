//! Relation inference from key naming conventions
//!
//! Every primary and unique key of every table becomes a candidate relation
//! pattern whose children are the columns, in any table, named after the key.
//!
//! ## Strategies
//!
//! - **default** - `users.id` is referenced by `%.user_id`
//! - **identical** - `users.user_id` is referenced by `%.user_id`
//!
//! ## Example
//!
//! ```rust
//! use relation2dbml::inference::{InferenceDefinitions, infer_relation_patterns};
//! use relation2dbml::models::{SchemaMap, TableSchema};
//!
//! let mut schema = SchemaMap::new();
//! schema.insert(
//!     "users",
//!     TableSchema::new(vec!["id".to_string()]).with_primary_keys(vec!["id".to_string()]),
//! );
//!
//! let patterns = infer_relation_patterns(&schema, &InferenceDefinitions::enabled());
//! assert_eq!(patterns[0].parent_qualified_column, "users.id");
//! assert_eq!(patterns[0].children(), &["%.user_id".to_string()]);
//! ```

mod config;
mod inferrer;

pub use config::{InferenceDefinitions, InferenceStrategy};
pub use inferrer::{RelationInferrer, infer_relation_patterns, singularize};
