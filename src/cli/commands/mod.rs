//! CLI command implementations

pub mod generate;

pub use generate::{GenerateOptions, generate_dbml, handle_generate};
