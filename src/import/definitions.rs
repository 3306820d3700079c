//! Relation definitions importer
//!
//! Reads the YAML document that declares relation patterns and inference
//! settings:
//!
//! ```yaml
//! inference:
//!   enabled: true
//!   strategy: default
//! relations:
//!   - parentQualifiedColumn: users.id
//!     childQualifiedColumns:
//!       - "%.owner_id"
//!     ignoreChildQualifiedColumns:
//!       - "audit_%.%"
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::ImportError;
use crate::models::{RelationDefinitions, RelationPattern};
use crate::validation::{ValidationError, validate_definitions, validate_relation_patterns};

/// Path read when no definitions file is given
pub const DEFAULT_DEFINITIONS_PATH: &str = "./relations.yml";

/// Relation definitions importer
#[derive(Debug, Default)]
pub struct DefinitionsImporter;

impl DefinitionsImporter {
    pub fn new() -> Self {
        Self
    }

    /// Parse and validate a definitions document
    ///
    /// # Arguments
    ///
    /// * `content` - The YAML document.
    /// * `source` - Name of the document used in error messages, usually its path.
    ///
    /// # Returns
    ///
    /// The validated `RelationDefinitions`, or `ImportError::InvalidDefinitions`
    /// when the document is structurally invalid.
    pub fn parse(&self, content: &str, source: &str) -> Result<RelationDefinitions, ImportError> {
        let document = parse_yaml(content)?;
        validate_definitions(&document).map_err(|e| invalid(source, e))?;

        debug!(
            "Relation definitions are valid. Relation definitions: {}",
            document
        );
        serde_json::from_value(document)
            .map_err(|e| ImportError::ParseError(format!("Failed to read relation definitions: {}", e)))
    }

    /// Read and validate a definitions file, `./relations.yml` when `path` is `None`
    pub fn import_file(&self, path: Option<&Path>) -> Result<RelationDefinitions, ImportError> {
        let path = path.unwrap_or(Path::new(DEFAULT_DEFINITIONS_PATH));
        let content = read_definitions_file(path)?;
        self.parse(&content, &path.display().to_string())
    }

    /// Parse only the `relations` list of a document.
    ///
    /// The `inference` section is neither required nor read. A document without
    /// relations yields an empty list.
    pub fn parse_patterns(
        &self,
        content: &str,
        source: &str,
    ) -> Result<Vec<RelationPattern>, ImportError> {
        let document = parse_yaml(content)?;
        let relations = match &document {
            Value::Null => None,
            Value::Object(object) => object.get("relations"),
            _ => return Err(invalid(source, ValidationError::NotAMapping)),
        };
        validate_relation_patterns(relations).map_err(|e| invalid(source, e))?;

        match relations {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(relations) => serde_json::from_value(relations.clone()).map_err(|e| {
                ImportError::ParseError(format!("Failed to read relation patterns: {}", e))
            }),
        }
    }

    /// Read the `relations` list of a file, `./relations.yml` when `path` is `None`
    pub fn import_patterns_file(
        &self,
        path: Option<&Path>,
    ) -> Result<Vec<RelationPattern>, ImportError> {
        let path = path.unwrap_or(Path::new(DEFAULT_DEFINITIONS_PATH));
        let content = read_definitions_file(path)?;
        self.parse_patterns(&content, &path.display().to_string())
    }
}

/// Load relation definitions, see [`DefinitionsImporter::import_file`]
pub fn load_relation_definitions(path: Option<&Path>) -> Result<RelationDefinitions, ImportError> {
    DefinitionsImporter::new().import_file(path)
}

/// Load a flat pattern list, see [`DefinitionsImporter::import_patterns_file`]
pub fn load_relation_patterns(path: Option<&Path>) -> Result<Vec<RelationPattern>, ImportError> {
    DefinitionsImporter::new().import_patterns_file(path)
}

fn read_definitions_file(path: &Path) -> Result<String, ImportError> {
    debug!(
        "Starting to read the relation definition file at path: {}",
        path.display()
    );
    fs::read_to_string(path)
        .map_err(|e| ImportError::IoError(format!("Failed to read {}: {}", path.display(), e)))
}

fn parse_yaml(content: &str) -> Result<Value, ImportError> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(content)
        .map_err(|e| ImportError::ParseError(format!("Failed to parse YAML: {}", e)))
}

fn invalid(source: &str, error: ValidationError) -> ImportError {
    ImportError::InvalidDefinitions {
        path: source.to_string(),
        source: error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::InferenceStrategy;

    const DEFINITIONS: &str = r#"
inference:
  enabled: true
  strategy: identical
ignoreSelfReferences: true
relations:
  - parentQualifiedColumn: users.id
    childQualifiedColumns:
      - "%.owner_id"
  - parentQualifiedColumn: orders.id
    ignoreChildQualifiedColumns:
      - "audit_%.%"
"#;

    #[test]
    fn test_parse_definitions() {
        let definitions = DefinitionsImporter::new()
            .parse(DEFINITIONS, "relations.yml")
            .unwrap();

        assert!(definitions.inference.enabled);
        assert_eq!(definitions.inference.strategy(), InferenceStrategy::Identical);
        assert!(definitions.ignores_self_references());
        assert_eq!(
            definitions.relations(),
            &[
                RelationPattern::new("users.id").with_children(["%.owner_id"]),
                RelationPattern::new("orders.id").with_ignored_children(["audit_%.%"]),
            ]
        );
    }

    #[test]
    fn test_relations_optional() {
        let definitions = DefinitionsImporter::new()
            .parse("inference:\n  enabled: false\n", "relations.yml")
            .unwrap();
        assert!(definitions.relations().is_empty());
        assert!(!definitions.ignores_self_references());
    }

    #[test]
    fn test_invalid_definitions_name_the_source() {
        let err = DefinitionsImporter::new()
            .parse("relations: []\n", "config/relations.yml")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid relation pattern format in config/relations.yml."
        );
        assert!(matches!(
            err,
            ImportError::InvalidDefinitions {
                source: ValidationError::InvalidInference(_),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_document_is_invalid() {
        let err = DefinitionsImporter::new().parse("", "relations.yml").unwrap_err();
        assert!(matches!(err, ImportError::InvalidDefinitions { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = DefinitionsImporter::new()
            .parse("inference: [unclosed", "relations.yml")
            .unwrap_err();
        assert!(matches!(err, ImportError::ParseError(_)));
    }

    #[test]
    fn test_parse_patterns_ignores_inference() {
        let patterns = DefinitionsImporter::new()
            .parse_patterns(
                "relations:\n  - parentQualifiedColumn: users.id\n    childQualifiedColumns: [orders.user_id]\n",
                "relations.yml",
            )
            .unwrap();
        assert_eq!(
            patterns,
            vec![RelationPattern::new("users.id").with_children(["orders.user_id"])]
        );

        assert!(
            DefinitionsImporter::new()
                .parse_patterns("", "relations.yml")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_parse_patterns_rejects_invalid_entry() {
        let err = DefinitionsImporter::new()
            .parse_patterns(
                "relations:\n  - childQualifiedColumns: [orders.user_id]\n",
                "relations.yml",
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ImportError::InvalidDefinitions {
                source: ValidationError::InvalidRelation { index: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_relation_definitions(Some(Path::new("/nonexistent/relations.yml")))
            .unwrap_err();
        assert!(matches!(err, ImportError::IoError(_)));
    }
}
