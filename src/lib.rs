//! relation2dbml - relation inference and resolution for DBML schemas
//!
//! Provides unified interfaces for:
//! - Schema and relation definition import
//! - Relation inference from key naming conventions
//! - Wildcard relation pattern resolution with ignore lists
//! - DBML export of the resolved relations
//! - Structural validation of relation definitions

pub mod export;
pub mod import;
pub mod inference;
pub mod matching;
pub mod models;
pub mod resolve;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use export::{DBMLExporter, ExportError, ExportResult};
pub use import::{
    DefinitionsImporter, ImportError, SchemaImporter, convert_to_schema_map,
    load_relation_definitions, load_relation_patterns,
};
pub use inference::{InferenceDefinitions, InferenceStrategy, infer_relation_patterns};
pub use matching::{WildcardMatcher, matches_wildcard};
pub use models::{
    DatabaseSchemaJson, QualifiedColumn, Relation, RelationDefinitions, RelationPattern,
    SchemaMap, TableSchema,
};
pub use resolve::{RelationResolver, find_relations, find_relations_from_patterns};
pub use validation::ValidationError;
