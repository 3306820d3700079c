//! Relation pattern inference from key naming conventions

use super::config::{InferenceDefinitions, InferenceStrategy};
use crate::matching::WILDCARD;
use crate::models::{RelationPattern, SchemaMap};
use tracing::debug;

/// Derives candidate relation patterns from primary and unique keys
pub struct RelationInferrer {
    definitions: InferenceDefinitions,
}

impl RelationInferrer {
    pub fn new(definitions: InferenceDefinitions) -> Self {
        Self { definitions }
    }

    /// Child pattern for a key of `table` under the configured strategy.
    ///
    /// - `identical`: `%.<key>`
    /// - `default`: `%.<singular table>_<key>`, e.g. `users.id` gives `%.user_id`
    pub fn child_pattern(&self, table: &str, key: &str) -> String {
        match self.definitions.strategy() {
            InferenceStrategy::Identical => format!("{}.{}", WILDCARD, key),
            InferenceStrategy::Default => format!("{}.{}_{}", WILDCARD, singularize(table), key),
        }
    }

    /// One pattern per primary key, then per unique key, of each table in
    /// schema order. Empty when inference is disabled.
    pub fn infer(&self, schema: &SchemaMap) -> Vec<RelationPattern> {
        if !self.definitions.enabled {
            debug!("Implicit relationship inference is disabled.");
            return Vec::new();
        }

        let mut patterns = Vec::new();
        for (table, table_schema) in schema.iter() {
            for key in table_schema
                .primary_keys
                .iter()
                .chain(table_schema.unique_keys.iter())
            {
                patterns.push(
                    RelationPattern::new(format!("{}.{}", table, key))
                        .with_children([self.child_pattern(table, key)]),
                );
            }
        }

        debug!(
            "Inferred Relation were generated successfully. Inferred Relation Pattern: {}",
            serde_json::to_string(&patterns).unwrap_or_default()
        );
        patterns
    }
}

/// Infer relation patterns with the given definitions
pub fn infer_relation_patterns(
    schema: &SchemaMap,
    inference: &InferenceDefinitions,
) -> Vec<RelationPattern> {
    RelationInferrer::new(inference.clone()).infer(schema)
}

/// English singular of a table name (`orders` -> `order`, `addresses` -> `address`)
pub fn singularize(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}
