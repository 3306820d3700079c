//! Relation resolution: pattern expansion, de-duplication and exclusion

use std::collections::HashSet;

use crate::matching::{WildcardMatcher, add_unique};
use crate::models::{QualifiedColumn, Relation, RelationDefinitions, RelationPattern, SchemaMap};
use tracing::{debug, warn};

/// How an ignore entry is compared against a candidate relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreMatch {
    /// Parent and child must both be equal
    Relation,
    /// Only the child table and column must be equal
    Child,
}

/// Relations and ignore entries collected while walking patterns
#[derive(Debug, Default)]
struct Collected {
    relations: Vec<Relation>,
    ignored: Vec<Relation>,
    /// The parent-to-itself edge of every valid pattern
    reflexive: Vec<Relation>,
}

impl Collected {
    fn into_filtered(self, mode: IgnoreMatch) -> Vec<Relation> {
        let reflexive: HashSet<&Relation> = self.reflexive.iter().collect();
        let ignored: HashSet<&Relation> = self.ignored.iter().collect();

        self.relations
            .iter()
            .filter(|relation| !reflexive.contains(relation))
            .filter(|relation| match mode {
                IgnoreMatch::Relation => !ignored.contains(relation),
                IgnoreMatch::Child => !self.ignored.iter().any(|i| i.same_child(relation)),
            })
            .cloned()
            .collect()
    }
}

/// Resolves relation patterns against a schema into concrete relations.
///
/// Patterns with a malformed or unknown parent are skipped with a warning, as
/// are malformed child entries; nothing aborts a run.
///
/// # Example
///
/// ```rust
/// use relation2dbml::models::{Relation, RelationPattern, SchemaMap, TableSchema};
/// use relation2dbml::resolve::RelationResolver;
///
/// let mut schema = SchemaMap::new();
/// schema.insert("users", TableSchema::new(vec!["id".into(), "name".into()]));
/// schema.insert("orders", TableSchema::new(vec!["id".into(), "user_id".into()]));
///
/// let patterns = vec![RelationPattern::new("users.id").with_children(["orders.user_id"])];
/// let relations = RelationResolver::new(&schema).resolve_patterns(&patterns);
///
/// assert_eq!(relations, vec![Relation::new("users", "id", "orders", "user_id")]);
/// ```
pub struct RelationResolver<'a> {
    schema: &'a SchemaMap,
    matcher: &'a WildcardMatcher,
}

impl<'a> RelationResolver<'a> {
    /// Resolver backed by the process-wide wildcard matcher
    pub fn new(schema: &'a SchemaMap) -> Self {
        Self::with_matcher(schema, WildcardMatcher::global())
    }

    pub fn with_matcher(schema: &'a SchemaMap, matcher: &'a WildcardMatcher) -> Self {
        Self { schema, matcher }
    }

    /// Resolve inferred patterns followed by the declared ones.
    ///
    /// An ignore entry excludes a relation only when parent and child are both
    /// equal. With `ignoreSelfReferences` set, relations whose child sits in the
    /// parent's own table are dropped as well.
    pub fn resolve(
        &self,
        definitions: &RelationDefinitions,
        inferred: &[RelationPattern],
    ) -> Vec<Relation> {
        let mut collected = Collected::default();
        for pattern in inferred.iter().chain(definitions.relations()) {
            self.collect(pattern, &mut collected);
        }

        let mut relations = collected.into_filtered(IgnoreMatch::Relation);
        if definitions.ignores_self_references() {
            relations.retain(|relation| !relation.is_self_reference());
        }

        debug!(
            "Resolved {} relation(s) from {} inferred and {} declared pattern(s)",
            relations.len(),
            inferred.len(),
            definitions.relations().len()
        );
        relations
    }

    /// Resolve a single flat list of patterns.
    ///
    /// Explicit ignore entries exclude every relation pointing at the same child
    /// column, whatever its parent. The implicit parent-to-itself edge only
    /// excludes that exact relation.
    pub fn resolve_patterns(&self, patterns: &[RelationPattern]) -> Vec<Relation> {
        let mut collected = Collected::default();
        for pattern in patterns {
            self.collect(pattern, &mut collected);
        }

        let relations = collected.into_filtered(IgnoreMatch::Child);
        debug!(
            "Resolved {} relation(s) from {} pattern(s)",
            relations.len(),
            patterns.len()
        );
        relations
    }

    fn collect(&self, pattern: &RelationPattern, collected: &mut Collected) {
        let Some(parent) = QualifiedColumn::parse(&pattern.parent_qualified_column) else {
            warn!(
                "Invalid format for parentQualifiedColumn: '{}'. Expected 'tableName.columnName'. Skipping relation.",
                pattern.parent_qualified_column
            );
            return;
        };

        if !self.schema.contains_column(&parent.table, &parent.column) {
            warn!(
                "ParentQualifiedColumn does not exist in Database schema: {}. Skipping relation.",
                pattern.parent_qualified_column
            );
            return;
        }

        add_unique(
            &mut collected.relations,
            self.expand_children(&parent, pattern.children()),
        );
        add_unique(
            &mut collected.ignored,
            self.expand_children(&parent, pattern.ignored_children()),
        );
        add_unique(&mut collected.reflexive, [Relation::reflexive(&parent)]);
    }

    /// One relation per (table, column) pair matched by each child entry
    fn expand_children(&self, parent: &QualifiedColumn, children: &[String]) -> Vec<Relation> {
        let mut relations = Vec::new();

        for child in children {
            let Some(child_pattern) = QualifiedColumn::parse(child) else {
                warn!(
                    "Invalid format for childQualifiedColumn: '{}'. Expected 'tableName.columnName'.",
                    child
                );
                continue;
            };

            for (table, table_schema) in self.schema.iter() {
                if !self.matcher.matches(table, &child_pattern.table) {
                    continue;
                }
                for column in &table_schema.columns {
                    if self.matcher.matches(column, &child_pattern.column) {
                        relations.push(Relation::new(
                            &parent.table,
                            &parent.column,
                            table,
                            column,
                        ));
                    }
                }
            }
        }

        relations
    }
}

/// Resolve declared and inferred patterns (see [`RelationResolver::resolve`])
pub fn find_relations(
    schema: &SchemaMap,
    definitions: &RelationDefinitions,
    inferred: &[RelationPattern],
) -> Vec<Relation> {
    RelationResolver::new(schema).resolve(definitions, inferred)
}

/// Resolve a flat pattern list (see [`RelationResolver::resolve_patterns`])
pub fn find_relations_from_patterns(
    schema: &SchemaMap,
    patterns: &[RelationPattern],
) -> Vec<Relation> {
    RelationResolver::new(schema).resolve_patterns(patterns)
}
