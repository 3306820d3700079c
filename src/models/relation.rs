//! Relation models for the SDK

use super::qualified_column::QualifiedColumn;
use crate::inference::InferenceDefinitions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared or inferred relation pattern.
///
/// The parent is a concrete `table.column`; children and ignored children are
/// `table.column` strings whose two halves are `%` wildcard patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct RelationPattern {
    pub parent_qualified_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_qualified_columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_child_qualified_columns: Option<Vec<String>>,
}

impl RelationPattern {
    pub fn new(parent_qualified_column: impl Into<String>) -> Self {
        Self {
            parent_qualified_column: parent_qualified_column.into(),
            child_qualified_columns: None,
            ignore_child_qualified_columns: None,
        }
    }

    pub fn with_children<S: Into<String>>(mut self, children: impl IntoIterator<Item = S>) -> Self {
        self.child_qualified_columns = Some(children.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ignored_children<S: Into<String>>(
        mut self,
        children: impl IntoIterator<Item = S>,
    ) -> Self {
        self.ignore_child_qualified_columns =
            Some(children.into_iter().map(Into::into).collect());
        self
    }

    pub fn children(&self) -> &[String] {
        self.child_qualified_columns.as_deref().unwrap_or_default()
    }

    pub fn ignored_children(&self) -> &[String] {
        self.ignore_child_qualified_columns
            .as_deref()
            .unwrap_or_default()
    }
}

/// A concrete edge between two columns; the resolver's output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub parent_table: String,
    pub parent_column: String,
    pub child_table: String,
    pub child_column: String,
}

impl Relation {
    pub fn new(
        parent_table: impl Into<String>,
        parent_column: impl Into<String>,
        child_table: impl Into<String>,
        child_column: impl Into<String>,
    ) -> Self {
        Self {
            parent_table: parent_table.into(),
            parent_column: parent_column.into(),
            child_table: child_table.into(),
            child_column: child_column.into(),
        }
    }

    /// The edge from a column to itself
    pub fn reflexive(parent: &QualifiedColumn) -> Self {
        Self::new(&parent.table, &parent.column, &parent.table, &parent.column)
    }

    pub fn parent(&self) -> QualifiedColumn {
        QualifiedColumn::new(&self.parent_table, &self.parent_column)
    }

    pub fn child(&self) -> QualifiedColumn {
        QualifiedColumn::new(&self.child_table, &self.child_column)
    }

    /// Whether both ends sit in the same table
    pub fn is_self_reference(&self) -> bool {
        self.parent_table == self.child_table
    }

    pub fn same_child(&self, other: &Relation) -> bool {
        self.child_table == other.child_table && self.child_column == other.child_column
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} < {}.{}",
            self.parent_table, self.parent_column, self.child_table, self.child_column
        )
    }
}

/// Contents of a relation definitions document
///
/// ```yaml
/// inference:
///   enabled: true
///   strategy: default
/// relations:
///   - parentQualifiedColumn: users.id
///     childQualifiedColumns: ["%.owner_id"]
///     ignoreChildQualifiedColumns: ["audit_logs.owner_id"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelationDefinitions {
    pub inference: InferenceDefinitions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<RelationPattern>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_self_references: Option<bool>,
}

impl RelationDefinitions {
    pub fn new(inference: InferenceDefinitions) -> Self {
        Self {
            inference,
            relations: None,
            ignore_self_references: None,
        }
    }

    pub fn with_relations(mut self, relations: Vec<RelationPattern>) -> Self {
        self.relations = Some(relations);
        self
    }

    pub fn with_ignore_self_references(mut self, ignore: bool) -> Self {
        self.ignore_self_references = Some(ignore);
        self
    }

    pub fn relations(&self) -> &[RelationPattern] {
        self.relations.as_deref().unwrap_or_default()
    }

    pub fn ignores_self_references(&self) -> bool {
        self.ignore_self_references.unwrap_or(false)
    }
}
