//! Import functionality
//!
//! Provides readers for the two inputs of a DBML generation run:
//! - relation definitions (YAML)
//! - the schema description produced by a DBML database connector (JSON)

pub mod definitions;
pub mod schema;

use crate::validation::ValidationError;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Invalid relation pattern format in {path}.")]
    InvalidDefinitions {
        path: String,
        #[source]
        source: ValidationError,
    },
}

pub use definitions::{
    DEFAULT_DEFINITIONS_PATH, DefinitionsImporter, load_relation_definitions,
    load_relation_patterns,
};
pub use schema::{SchemaImporter, convert_to_schema_map};
