//! Structural validation of relation definition documents
//!
//! Documents are checked as generic `serde_json::Value` trees before they are
//! deserialized, so that every problem is reported with its location instead of
//! surfacing as an opaque deserialization error.

use serde_json::{Map, Value};
use tracing::debug;

use crate::inference::InferenceStrategy;

const PARENT_KEY: &str = "parentQualifiedColumn";
const CHILDREN_KEY: &str = "childQualifiedColumns";
const IGNORED_CHILDREN_KEY: &str = "ignoreChildQualifiedColumns";
const PATTERN_KEYS: [&str; 3] = [PARENT_KEY, CHILDREN_KEY, IGNORED_CHILDREN_KEY];

const ENABLED_KEY: &str = "enabled";
const STRATEGY_KEY: &str = "strategy";
const INFERENCE_KEYS: [&str; 2] = [ENABLED_KEY, STRATEGY_KEY];

/// Structural problem in a relation definitions document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Relation definitions must be a mapping")]
    NotAMapping,
    #[error("Inference is invalid: {0}")]
    InvalidInference(String),
    #[error("Relations must be a list")]
    RelationsNotAList,
    /// `index` is 1-based
    #[error("Relation at index {index} is invalid: {reason}")]
    InvalidRelation { index: usize, reason: String },
    #[error("ignoreSelfReferences must be a boolean")]
    InvalidIgnoreSelfReferences,
}

/// Validate the `inference` section. It is required.
pub fn validate_inference_definitions(inference: Option<&Value>) -> Result<(), ValidationError> {
    let result = check_inference(inference).map_err(ValidationError::InvalidInference);
    if result.is_err() {
        debug!("Inference is invalid.");
    }
    result
}

fn check_inference(inference: Option<&Value>) -> Result<(), String> {
    let object = match inference {
        None | Some(Value::Null) => return Err("inference is not specified".to_string()),
        Some(value) => value
            .as_object()
            .ok_or_else(|| "inference must be a mapping".to_string())?,
    };

    check_allowed_keys(object, &INFERENCE_KEYS)?;

    match object.get(ENABLED_KEY) {
        Some(Value::Bool(_)) => {}
        Some(_) => return Err(format!("'{}' must be a boolean", ENABLED_KEY)),
        None => return Err(format!("'{}' is required", ENABLED_KEY)),
    }

    if let Some(strategy) = object.get(STRATEGY_KEY) {
        let strategy = strategy
            .as_str()
            .ok_or_else(|| format!("'{}' must be a string", STRATEGY_KEY))?;
        strategy.parse::<InferenceStrategy>()?;
    }

    Ok(())
}

/// Validate one relation pattern. `index` is the 0-based list position.
pub fn validate_relation_pattern(relation: &Value, index: usize) -> Result<(), ValidationError> {
    check_relation_pattern(relation).map_err(|reason| {
        debug!(
            "Relation at index {} is invalid. relation: {}",
            index + 1,
            relation
        );
        ValidationError::InvalidRelation {
            index: index + 1,
            reason,
        }
    })
}

fn check_relation_pattern(relation: &Value) -> Result<(), String> {
    let object = relation
        .as_object()
        .ok_or_else(|| "relation must be a mapping".to_string())?;

    check_allowed_keys(object, &PATTERN_KEYS)?;

    match object.get(PARENT_KEY) {
        Some(Value::String(_)) => {}
        Some(_) => return Err(format!("'{}' must be a string", PARENT_KEY)),
        None => return Err(format!("'{}' is required", PARENT_KEY)),
    }

    if !object.contains_key(CHILDREN_KEY) && !object.contains_key(IGNORED_CHILDREN_KEY) {
        return Err(format!(
            "one of '{}' or '{}' is required",
            CHILDREN_KEY, IGNORED_CHILDREN_KEY
        ));
    }

    for key in [CHILDREN_KEY, IGNORED_CHILDREN_KEY] {
        if let Some(value) = object.get(key) {
            check_string_list(key, value)?;
        }
    }

    Ok(())
}

/// Validate the `relations` list. An absent list is valid.
pub fn validate_relation_patterns(relations: Option<&Value>) -> Result<(), ValidationError> {
    match relations {
        None | Some(Value::Null) => {
            debug!("Relations is not specified.");
            Ok(())
        }
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .try_for_each(|(index, relation)| validate_relation_pattern(relation, index)),
        Some(_) => Err(ValidationError::RelationsNotAList),
    }
}

/// Validate a whole definitions document, stopping at the first problem
pub fn validate_definitions(document: &Value) -> Result<(), ValidationError> {
    let object = document.as_object().ok_or(ValidationError::NotAMapping)?;

    validate_inference_definitions(object.get("inference"))?;
    validate_relation_patterns(object.get("relations"))?;

    match object.get("ignoreSelfReferences") {
        None | Some(Value::Null) | Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err(ValidationError::InvalidIgnoreSelfReferences),
    }
}

fn check_allowed_keys(object: &Map<String, Value>, allowed: &[&str]) -> Result<(), String> {
    match object.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(format!("unexpected key '{}'", key)),
        None => Ok(()),
    }
}

fn check_string_list(key: &str, value: &Value) -> Result<(), String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("'{}' must be a list", key))?;
    if items.iter().all(Value::is_string) {
        Ok(())
    } else {
        Err(format!("'{}' must only contain strings", key))
    }
}
