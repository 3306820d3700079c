//! CLI error type

use crate::export::ExportError;
use crate::import::ImportError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
