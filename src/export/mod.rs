//! Export functionality
//!
//! Provides the DBML exporter: a minimal schema document followed by the
//! resolved relations as `Ref` statements.

pub mod dbml;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(String),
}

pub use dbml::DBMLExporter;
