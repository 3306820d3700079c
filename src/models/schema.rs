//! Schema map model for the SDK
//!
//! A [`SchemaMap`] is the read-only view of a database that inference and
//! relation resolution work against: per table, its column names and the
//! columns flagged as primary or unique keys.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Columns and keys of a single table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    /// Column names, in display order
    pub columns: Vec<String>,
    /// Columns flagged as primary key
    #[serde(default)]
    pub primary_keys: Vec<String>,
    /// Columns flagged as unique
    #[serde(default)]
    pub unique_keys: Vec<String>,
}

impl TableSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            primary_keys: Vec::new(),
            unique_keys: Vec::new(),
        }
    }

    pub fn with_primary_keys(mut self, keys: Vec<String>) -> Self {
        self.primary_keys = keys;
        self
    }

    pub fn with_unique_keys(mut self, keys: Vec<String>) -> Self {
        self.unique_keys = keys;
        self
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// Mapping from table name to [`TableSchema`], iterated in insertion order.
///
/// Inference output order follows this order, so it must be the order the
/// schema source listed its tables in.
///
/// # Example
///
/// ```rust
/// use relation2dbml::models::{SchemaMap, TableSchema};
///
/// let mut schema = SchemaMap::new();
/// schema.insert(
///     "users",
///     TableSchema::new(vec!["id".to_string(), "name".to_string()])
///         .with_primary_keys(vec!["id".to_string()]),
/// );
///
/// assert!(schema.contains_column("users", "id"));
/// assert!(!schema.contains_column("users", "email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMap {
    tables: Vec<(String, TableSchema)>,
    index: HashMap<String, usize>,
}

impl SchemaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a table. A replaced table keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, table: TableSchema) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.tables[position].1 = table,
            None => {
                self.index.insert(name.clone(), self.tables.len());
                self.tables.push((name, table));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TableSchema> {
        self.index.get(name).map(|&position| &self.tables[position].1)
    }

    /// Whether `table` exists and lists `column` among its columns
    pub fn contains_column(&self, table: &str, column: &str) -> bool {
        self.get(table).is_some_and(|t| t.has_column(column))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableSchema)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, TableSchema)> for SchemaMap {
    fn from_iter<I: IntoIterator<Item = (N, TableSchema)>>(iter: I) -> Self {
        let mut schema = SchemaMap::new();
        for (name, table) in iter {
            schema.insert(name, table);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let schema: SchemaMap = [
            ("users", TableSchema::new(columns(&["id"]))),
            ("orders", TableSchema::new(columns(&["id"]))),
            ("addresses", TableSchema::new(columns(&["id"]))),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = schema.table_names().collect();
        assert_eq!(names, vec!["users", "orders", "addresses"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut schema = SchemaMap::new();
        schema.insert("users", TableSchema::new(columns(&["id"])));
        schema.insert("orders", TableSchema::new(columns(&["id"])));
        schema.insert("users", TableSchema::new(columns(&["id", "email"])));

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.table_names().next(), Some("users"));
        assert!(schema.contains_column("users", "email"));
    }

    #[test]
    fn test_contains_column() {
        let mut schema = SchemaMap::new();
        schema.insert("users", TableSchema::new(columns(&["id", "name"])));

        assert!(schema.contains_column("users", "name"));
        assert!(!schema.contains_column("users", "email"));
        assert!(!schema.contains_column("orders", "id"));
    }
}
