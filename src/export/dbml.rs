//! DBML exporter for schema descriptions and resolved relations.
//!
//! Relations are rendered as named `Ref` statements:
//!
//! ```text
//! Ref "infer_fk_users_orders_id":"users"."id" < "orders"."user_id"
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::export::{ExportError, ExportResult};
use crate::models::{DatabaseSchemaJson, Relation, SchemaField};

/// Exporter for DBML format.
pub struct DBMLExporter;

impl DBMLExporter {
    /// Render one `Ref` statement.
    ///
    /// The identifier is `infer_fk_<parent table>_<child table>_<parent column>`.
    pub fn generate_ref(relation: &Relation) -> String {
        format!(
            "Ref \"infer_fk_{}_{}_{}\":\"{}\".\"{}\" < \"{}\".\"{}\"",
            relation.parent_table,
            relation.child_table,
            relation.parent_column,
            relation.parent_table,
            relation.parent_column,
            relation.child_table,
            relation.child_column
        )
    }

    /// Render every relation, separated by blank lines.
    ///
    /// # Example
    ///
    /// ```rust
    /// use relation2dbml::export::dbml::DBMLExporter;
    /// use relation2dbml::models::Relation;
    ///
    /// let refs = DBMLExporter::generate_refs(&[Relation::new("users", "id", "orders", "user_id")]);
    /// assert_eq!(refs, r#"Ref "infer_fk_users_orders_id":"users"."id" < "orders"."user_id""#);
    /// ```
    pub fn generate_refs(relations: &[Relation]) -> String {
        relations
            .iter()
            .map(Self::generate_ref)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render the tables of a schema description as DBML `Table` blocks.
    ///
    /// Only names, types and the `pk`, `unique`, `not null` and `increment`
    /// settings are carried over. Keys declared in `tableConstraints` are
    /// merged into the column settings.
    pub fn generate_schema(schema_json: &DatabaseSchemaJson) -> String {
        schema_json
            .schema_tables()
            .iter()
            .map(|table| {
                let constraints = schema_json.table_constraints(&table.name);
                let mut dbml = format!("Table {} {{\n", Self::quote_identifier(&table.name));

                for field in schema_json.table_fields(&table.name) {
                    let (pk, unique) = constraints
                        .iter()
                        .find(|(column, _)| *column == field.name)
                        .map(|(_, c)| (c.pk, c.unique))
                        .unwrap_or_default();
                    dbml.push_str(&Self::column_definition(&field, pk, unique));
                    dbml.push('\n');
                }

                if let Some(note) = table.note_text() {
                    dbml.push_str(&format!("\n  Note: {}\n", Self::quote_string(note)));
                }
                dbml.push_str("}\n");
                dbml
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn column_definition(field: &SchemaField, pk: bool, unique: bool) -> String {
        let mut definition = format!(
            "  {} {}",
            Self::quote_identifier(&field.name),
            Self::column_type(field)
        );

        let mut settings = Vec::new();
        if field.pk || pk {
            settings.push("pk".to_string());
        }
        if field.increment {
            settings.push("increment".to_string());
        }
        if field.unique || unique {
            settings.push("unique".to_string());
        }
        if field.not_null {
            settings.push("not null".to_string());
        }
        if let Some(note) = field.note_text() {
            settings.push(format!("note: {}", Self::quote_string(note)));
        }

        if !settings.is_empty() {
            definition.push_str(&format!(" [{}]", settings.join(", ")));
        }
        definition
    }

    fn column_type(field: &SchemaField) -> String {
        match field.type_name() {
            Some(type_name) if type_name.chars().any(char::is_whitespace) => {
                Self::quote_identifier(type_name)
            }
            Some(type_name) => type_name.to_string(),
            None => "unknown".to_string(),
        }
    }

    fn quote_identifier(name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\\\""))
    }

    fn quote_string(value: &str) -> String {
        format!("'{}'", value.replace('\'', "\\'"))
    }

    /// Schema document followed by the relation `Ref` statements
    pub fn generate(
        &self,
        schema_json: &DatabaseSchemaJson,
        relations: &[Relation],
    ) -> Result<ExportResult, ExportError> {
        let content = format!(
            "{}\n{}",
            Self::generate_schema(schema_json),
            Self::generate_refs(relations)
        );
        Ok(ExportResult {
            content,
            format: "dbml".to_string(),
        })
    }

    /// Write `content` to `out_file`, or to stdout when no file is given
    pub fn write(&self, content: &str, out_file: Option<&Path>) -> Result<(), ExportError> {
        match out_file {
            Some(path) => {
                fs::write(path, content).map_err(|e| {
                    ExportError::IoError(format!("Failed to write {}: {}", path.display(), e))
                })?;
                debug!("Successfully wrote to file: {}", path.display());
            }
            None => {
                debug!("No output file specified, printing to stdout.");
                println!("{}", content);
            }
        }
        Ok(())
    }
}
