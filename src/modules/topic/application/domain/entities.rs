use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to the user owning a topic.
///
/// The user store lives outside this service, so the identifier is carried
/// and persisted verbatim without any format assumptions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Up to three candidate topics parsed from a model reply. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionResult {
    pub topics: Vec<String>,
}

/// Verdict for a user-supplied topic, with the raw model reply as suggestion
/// text. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub suggestion: String,
}
