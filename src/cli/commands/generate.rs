//! Generate command implementation

use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::error::CliError;
use crate::export::DBMLExporter;
use crate::import::{DefinitionsImporter, SchemaImporter, convert_to_schema_map};
use crate::inference::infer_relation_patterns;
use crate::resolve::find_relations;

/// Inputs of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Schema description JSON
    pub schema_file: PathBuf,
    /// Relation definitions YAML, `./relations.yml` when unset
    pub input_file: Option<PathBuf>,
    /// Output file, stdout when unset
    pub out_file: Option<PathBuf>,
}

/// Build the DBML document for the given inputs
pub fn generate_dbml(options: &GenerateOptions) -> Result<String, CliError> {
    if !options.schema_file.is_file() {
        return Err(CliError::InvalidArgument(format!(
            "Schema file not found: {}",
            options.schema_file.display()
        )));
    }

    let definitions = DefinitionsImporter::new().import_file(options.input_file.as_deref())?;

    let schema_json = SchemaImporter::new().import_file(&options.schema_file)?;
    let schema = convert_to_schema_map(&schema_json);

    let inferred = infer_relation_patterns(&schema, &definitions.inference);
    let relations = find_relations(&schema, &definitions, &inferred);
    info!("Resolved {} relation(s)", relations.len());

    let result = DBMLExporter.generate(&schema_json, &relations)?;
    debug!("Generated {} bytes of {}", result.content.len(), result.format);
    Ok(result.content)
}

/// Handle the generate command
pub fn handle_generate(options: &GenerateOptions) -> Result<(), CliError> {
    info!(
        "Starting relation2dbml script (Version: {})",
        env!("CARGO_PKG_VERSION")
    );

    let content = generate_dbml(options)?;
    DBMLExporter.write(&content, options.out_file.as_deref())?;

    info!("DBML generation completed successfully.");
    Ok(())
}
