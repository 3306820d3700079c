//! Qualified column reference for the SDK

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `table.column` reference to a single column of a single table.
///
/// Either side may be a `%` wildcard pattern when the reference comes from a
/// child list of a relation pattern; parsing does not interpret wildcards.
///
/// # Example
///
/// ```rust
/// use relation2dbml::models::QualifiedColumn;
///
/// let column = QualifiedColumn::parse(" users . id ").unwrap();
/// assert_eq!(column.table, "users");
/// assert_eq!(column.column, "id");
///
/// assert!(QualifiedColumn::parse("public.users.id").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct QualifiedColumn {
    pub table: String,
    pub column: String,
}

impl QualifiedColumn {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Parse a `table.column` string.
    ///
    /// Returns `None` unless the trimmed input splits on `.` into exactly two
    /// parts that are both non-empty after trimming. Callers decide how to
    /// report the failure.
    pub fn parse(qualified_column: &str) -> Option<Self> {
        let mut parts = qualified_column.trim().split('.');
        let table = parts.next()?.trim();
        let column = parts.next()?.trim();
        if parts.next().is_some() || table.is_empty() || column.is_empty() {
            return None;
        }
        Some(Self::new(table, column))
    }
}

impl fmt::Display for QualifiedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            QualifiedColumn::parse("user.id"),
            Some(QualifiedColumn::new("user", "id"))
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            QualifiedColumn::parse("  users  .  id  "),
            Some(QualifiedColumn::new("users", "id"))
        );
    }

    #[test]
    fn test_parse_wildcards_untouched() {
        assert_eq!(
            QualifiedColumn::parse("%.user_%"),
            Some(QualifiedColumn::new("%", "user_%"))
        );
    }

    #[test]
    fn test_parse_wrong_part_count() {
        assert!(QualifiedColumn::parse("user_id").is_none());
        assert!(QualifiedColumn::parse("schema.user.id").is_none());
        assert!(QualifiedColumn::parse("").is_none());
    }

    #[test]
    fn test_parse_empty_sides() {
        assert!(QualifiedColumn::parse(".id").is_none());
        assert!(QualifiedColumn::parse("users.").is_none());
        assert!(QualifiedColumn::parse(".").is_none());
        assert!(QualifiedColumn::parse("users. ").is_none());
        assert!(QualifiedColumn::parse("  .id").is_none());
    }

    #[test]
    fn test_display_round_trip() {
        for (table, column) in [("users", "id"), ("order_items", "order_id"), ("a", "b")] {
            let raw = QualifiedColumn::new(table, column).to_string();
            assert_eq!(
                QualifiedColumn::parse(&raw),
                Some(QualifiedColumn::new(table, column))
            );
        }
    }
}
