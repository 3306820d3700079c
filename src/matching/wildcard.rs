//! `%` wildcard matching for table and column names

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::warn;

/// The wildcard character: matches any run of zero or more characters
pub const WILDCARD: char = '%';

static GLOBAL_MATCHER: Lazy<WildcardMatcher> = Lazy::new(WildcardMatcher::new);

/// Matches names against `%` wildcard patterns.
///
/// Patterns are compiled once to an anchored regex and cached by their raw
/// text for the lifetime of the matcher. The cache only grows.
///
/// Matching is case-sensitive and every character except `%` matches
/// literally. There is no way to match a literal `%`.
///
/// # Example
///
/// ```rust
/// use relation2dbml::matching::WildcardMatcher;
///
/// let matcher = WildcardMatcher::new();
/// assert!(matcher.matches("user_id", "%_id"));
/// assert!(matcher.matches("order_created_date", "order_%date"));
/// assert!(!matcher.matches("user_id", "id%"));
/// ```
#[derive(Debug, Default)]
pub struct WildcardMatcher {
    cache: Mutex<HashMap<String, Regex>>,
}

impl WildcardMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide matcher used by [`matches_wildcard`]
    pub fn global() -> &'static WildcardMatcher {
        &GLOBAL_MATCHER
    }

    /// Whether `value` matches `pattern` in full
    pub fn matches(&self, value: &str, pattern: &str) -> bool {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(regex) = cache.get(pattern) {
            return regex.is_match(value);
        }

        match compile(pattern) {
            Ok(regex) => {
                let matched = regex.is_match(value);
                cache.insert(pattern.to_string(), regex);
                matched
            }
            Err(e) => {
                warn!("Could not compile wildcard pattern '{}': {}", pattern, e);
                false
            }
        }
    }

    /// Keep the entries of `values` that match `pattern`, in order
    pub fn filter<'a, I>(&self, values: I, pattern: &str) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        values
            .into_iter()
            .filter(|value| self.matches(value, pattern))
            .collect()
    }

    /// Number of distinct patterns compiled so far
    pub fn cached_patterns(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Match against the process-wide matcher
pub fn matches_wildcard(value: &str, pattern: &str) -> bool {
    WildcardMatcher::global().matches(value, pattern)
}

/// Whether `pattern` contains a wildcard
pub fn is_wildcard(pattern: &str) -> bool {
    pattern.contains(WILDCARD)
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    let body = pattern
        .split(WILDCARD)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("(?s)^{}$", body))
}
