//! Validation functionality
//!
//! Provides structural validation for:
//! - the `inference` section of a relation definitions document
//! - relation patterns and the `relations` list

pub mod definitions;

pub use definitions::{
    ValidationError, validate_definitions, validate_inference_definitions,
    validate_relation_pattern, validate_relation_patterns,
};
