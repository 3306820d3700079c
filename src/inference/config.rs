//! Configuration for relation inference

use serde::{Deserialize, Serialize};

/// Naming convention used to derive child column patterns from a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceStrategy {
    /// `users.id` is referenced by `<any table>.user_id`
    #[default]
    Default,
    /// `users.user_id` is referenced by `<any table>.user_id`
    Identical,
}

impl std::fmt::Display for InferenceStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceStrategy::Default => write!(f, "default"),
            InferenceStrategy::Identical => write!(f, "identical"),
        }
    }
}

impl std::str::FromStr for InferenceStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(InferenceStrategy::Default),
            "identical" => Ok(InferenceStrategy::Identical),
            _ => Err(format!("Unknown inference strategy: {}", s)),
        }
    }
}

/// The `inference` section of a relation definitions document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InferenceDefinitions {
    /// Whether relations are inferred from primary and unique keys
    pub enabled: bool,
    /// Naming strategy; `default` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<InferenceStrategy>,
}

impl InferenceDefinitions {
    /// Inference switched on with the default strategy
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            strategy: None,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: InferenceStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// The strategy in effect
    pub fn strategy(&self) -> InferenceStrategy {
        self.strategy.unwrap_or_default()
    }
}
