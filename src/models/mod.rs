//! Models module for the SDK
//!
//! Defines the data structures shared by inference, relation resolution,
//! import and export.

pub mod database_schema;
pub mod qualified_column;
pub mod relation;
pub mod schema;

pub use database_schema::{ColumnConstraint, DatabaseSchemaJson, SchemaField, SchemaTable};
pub use qualified_column::QualifiedColumn;
pub use relation::{Relation, RelationDefinitions, RelationPattern};
pub use schema::{SchemaMap, TableSchema};
