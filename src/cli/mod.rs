//! CLI module for the relation2dbml binary

pub mod commands;
pub mod error;

pub use error::CliError;
