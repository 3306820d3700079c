//! Schema description importer
//!
//! Reads the JSON schema description and builds the [`SchemaMap`] that
//! inference and relation resolution run against.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::ImportError;
use crate::models::{DatabaseSchemaJson, SchemaMap, TableSchema};

/// Schema description importer
#[derive(Debug, Default)]
pub struct SchemaImporter;

impl SchemaImporter {
    pub fn new() -> Self {
        Self
    }

    /// Parse a schema description from JSON text
    pub fn parse(&self, content: &str) -> Result<DatabaseSchemaJson, ImportError> {
        serde_json::from_str(content)
            .map_err(|e| ImportError::ParseError(format!("Failed to parse schema JSON: {}", e)))
    }

    /// Read a schema description file
    pub fn import_file(&self, path: &Path) -> Result<DatabaseSchemaJson, ImportError> {
        debug!("Reading schema description from {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| ImportError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;
        let schema = self.parse(&content)?;
        info!(
            "Loaded schema description with {} table(s) from {}",
            schema.tables.len(),
            path.display()
        );
        Ok(schema)
    }
}

/// Build the schema map, one table per `tables` entry in document order.
///
/// Columns come from `fields[<table>]`; primary and unique keys from the
/// `pk` and `unique` flags of `tableConstraints[<table>]`. Missing sections
/// give empty lists.
pub fn convert_to_schema_map(schema_json: &DatabaseSchemaJson) -> SchemaMap {
    let mut schema_map = SchemaMap::new();

    for table in schema_json.schema_tables() {
        let columns = schema_json
            .table_fields(&table.name)
            .into_iter()
            .map(|field| field.name)
            .collect();

        let constraints = schema_json.table_constraints(&table.name);
        let primary_keys = constraints
            .iter()
            .filter(|(_, constraint)| constraint.pk)
            .map(|(column, _)| column.clone())
            .collect();
        let unique_keys = constraints
            .iter()
            .filter(|(_, constraint)| constraint.unique)
            .map(|(column, _)| column.clone())
            .collect();

        schema_map.insert(
            table.name,
            TableSchema::new(columns)
                .with_primary_keys(primary_keys)
                .with_unique_keys(unique_keys),
        );
    }

    schema_map
}
