//! Schema description model
//!
//! Mirrors the JSON that DBML database connectors produce:
//!
//! ```json
//! {
//!   "tables": { "users": { "name": "users", "schemaName": "public" } },
//!   "fields": { "users": [ { "name": "id", "type": { "type_name": "int4" }, "pk": true } ] },
//!   "tableConstraints": { "users": { "id": { "pk": true }, "email": { "unique": true } } }
//! }
//! ```
//!
//! The top-level maps are kept as raw JSON (document order preserved) so the
//! description can be passed through untouched; typed views read the parts the
//! SDK needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSchemaJson {
    #[serde(default)]
    pub tables: Map<String, Value>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub table_constraints: Map<String, Value>,
}

/// Entry of the `tables` map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    /// Either `{ "value": ... }` or a bare string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Value>,
}

impl SchemaTable {
    pub fn note_text(&self) -> Option<&str> {
        note_text(self.note.as_ref()?)
    }
}

/// Entry of a `fields` list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaField {
    pub name: String,
    /// Either `{ "type_name": ... }` or a bare type string
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<Value>,
    #[serde(default)]
    pub pk: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub increment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Value>,
}

impl SchemaField {
    pub fn note_text(&self) -> Option<&str> {
        note_text(self.note.as_ref()?)
    }

    pub fn type_name(&self) -> Option<&str> {
        match self.field_type.as_ref()? {
            Value::String(s) => Some(s),
            Value::Object(obj) => obj.get("type_name").and_then(Value::as_str),
            _ => None,
        }
    }
}

fn note_text(note: &Value) -> Option<&str> {
    match note {
        Value::String(s) => Some(s),
        Value::Object(obj) => obj.get("value").and_then(Value::as_str),
        _ => None,
    }
}

/// Per-column entry of a `tableConstraints` table map
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColumnConstraint {
    #[serde(default)]
    pub pk: bool,
    #[serde(default)]
    pub unique: bool,
}

impl DatabaseSchemaJson {
    /// Tables in document order. Entries that are not table objects are skipped.
    pub fn schema_tables(&self) -> Vec<SchemaTable> {
        self.tables
            .iter()
            .filter_map(|(key, value)| match SchemaTable::deserialize(value) {
                Ok(table) => Some(table),
                Err(e) => {
                    warn!("Skipping malformed table entry '{}': {}", key, e);
                    None
                }
            })
            .collect()
    }

    /// Fields of `table` in document order
    pub fn table_fields(&self, table: &str) -> Vec<SchemaField> {
        let Some(Value::Array(fields)) = self.fields.get(table) else {
            return Vec::new();
        };
        fields
            .iter()
            .filter_map(|value| match SchemaField::deserialize(value) {
                Ok(field) => Some(field),
                Err(e) => {
                    warn!("Skipping malformed field entry in table '{}': {}", table, e);
                    None
                }
            })
            .collect()
    }

    /// Column constraints of `table`, in document order
    pub fn table_constraints(&self, table: &str) -> Vec<(String, ColumnConstraint)> {
        let Some(Value::Object(constraints)) = self.table_constraints.get(table) else {
            return Vec::new();
        };
        constraints
            .iter()
            .filter_map(|(column, value)| match ColumnConstraint::deserialize(value) {
                Ok(constraint) => Some((column.clone(), constraint)),
                Err(e) => {
                    warn!(
                        "Skipping malformed constraint for '{}.{}': {}",
                        table, column, e
                    );
                    None
                }
            })
            .collect()
    }
}
