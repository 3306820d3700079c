//! Import module tests

use relation2dbml::import::{
    DEFAULT_DEFINITIONS_PATH, DefinitionsImporter, ImportError, SchemaImporter,
    convert_to_schema_map, load_relation_definitions, load_relation_patterns,
};
use relation2dbml::inference::InferenceStrategy;
use relation2dbml::models::RelationPattern;
use relation2dbml::validation::ValidationError;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod definitions_import_tests {
    use super::*;

    #[test]
    fn test_load_definitions_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "relations.yml",
            r#"
inference:
  enabled: true
  strategy: default
relations:
  - parentQualifiedColumn: users.id
    childQualifiedColumns:
      - "%.created_by"
      - "%.updated_by"
    ignoreChildQualifiedColumns:
      - "audit_logs.%"
"#,
        );

        let definitions = load_relation_definitions(Some(&path)).unwrap();

        assert!(definitions.inference.enabled);
        assert_eq!(definitions.inference.strategy(), InferenceStrategy::Default);
        assert_eq!(definitions.relations().len(), 1);
        assert_eq!(
            definitions.relations()[0].children(),
            &["%.created_by".to_string(), "%.updated_by".to_string()]
        );
        assert_eq!(
            definitions.relations()[0].ignored_children(),
            &["audit_logs.%".to_string()]
        );
    }

    #[test]
    fn test_invalid_relation_reports_index() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "relations.yml",
            r#"
inference:
  enabled: false
relations:
  - parentQualifiedColumn: users.id
    childQualifiedColumns: ["orders.user_id"]
  - parentQualifiedColumn: orders.id
    childQualifiedColumns: ["payments.order_id"]
    unknownKey: 1
"#,
        );

        match load_relation_definitions(Some(&path)) {
            Err(ImportError::InvalidDefinitions { path: source, source: error }) => {
                assert_eq!(source, path.display().to_string());
                assert!(matches!(error, ValidationError::InvalidRelation { index: 2, .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_patterns_without_inference() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "patterns.yml",
            "relations:\n  - parentQualifiedColumn: users.id\n    childQualifiedColumns: [\"orders.user_id\"]\n",
        );

        assert_eq!(
            load_relation_patterns(Some(&path)).unwrap(),
            vec![RelationPattern::new("users.id").with_children(["orders.user_id"])]
        );
    }

    #[test]
    fn test_default_path() {
        assert_eq!(DEFAULT_DEFINITIONS_PATH, "./relations.yml");
    }

    #[test]
    fn test_strategy_must_be_known() {
        let err = DefinitionsImporter::new()
            .parse("inference:\n  enabled: true\n  strategy: fuzzy\n", "relations.yml")
            .unwrap_err();
        assert!(matches!(
            err,
            ImportError::InvalidDefinitions {
                source: ValidationError::InvalidInference(_),
                ..
            }
        ));
    }
}

mod schema_import_tests {
    use super::*;

    #[test]
    fn test_import_schema_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "schema.json",
            r#"{
                "tables": {
                    "public.accounts": { "name": "accounts", "schemaName": "public" },
                    "public.profiles": { "name": "profiles", "schemaName": "public" }
                },
                "fields": {
                    "accounts": [ { "name": "id" }, { "name": "email" } ],
                    "profiles": [ { "name": "id" }, { "name": "account_id" } ]
                },
                "tableConstraints": {
                    "accounts": { "id": { "pk": true }, "email": { "unique": true } },
                    "profiles": { "id": { "pk": true } }
                }
            }"#,
        );

        let schema_json = SchemaImporter::new().import_file(&path).unwrap();
        let schema = convert_to_schema_map(&schema_json);

        assert_eq!(
            schema.table_names().collect::<Vec<_>>(),
            vec!["accounts", "profiles"]
        );
        let accounts = schema.get("accounts").unwrap();
        assert_eq!(accounts.primary_keys, vec!["id"]);
        assert_eq!(accounts.unique_keys, vec!["email"]);
        assert!(schema.contains_column("profiles", "account_id"));
    }

    #[test]
    fn test_malformed_field_entries_skipped() {
        let schema_json = SchemaImporter::new()
            .parse(
                r#"{
                    "tables": { "t": { "name": "t" }, "broken": 1 },
                    "fields": { "t": [ { "name": "a" }, { "type": "int" }, { "name": "b" } ] }
                }"#,
            )
            .unwrap();
        let schema = convert_to_schema_map(&schema_json);

        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("t").unwrap().columns, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_file() {
        let err = SchemaImporter::new()
            .import_file(std::path::Path::new("/nonexistent/schema.json"))
            .unwrap_err();
        assert!(matches!(err, ImportError::IoError(_)));
    }
}
