// ABOUTME: Validated display label for a trait in validation messages.
// ABOUTME: Ensures labels are non-empty, unprefixed, and free of whitespace.

use crate::model::TraitId;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraitLabelError {
    #[error("trait label cannot be empty")]
    Empty,

    #[error("trait label must not start with '@'")]
    LeadingAt,

    #[error("trait label cannot contain whitespace")]
    ContainsWhitespace,
}

/// The conventional external name of a trait, e.g. `clientOptional`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraitLabel(String);

impl TraitLabel {
    pub fn new(value: &str) -> Result<Self, TraitLabelError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TraitLabelError::Empty);
        }

        if trimmed.starts_with('@') {
            return Err(TraitLabelError::LeadingAt);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(TraitLabelError::ContainsWhitespace);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Labels a trait by its shape name. Shape names are identifiers, so the
/// result always satisfies the label rules.
impl From<&TraitId> for TraitLabel {
    fn from(trait_id: &TraitId) -> Self {
        Self(trait_id.name().to_string())
    }
}
