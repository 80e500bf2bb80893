// ABOUTME: Absolute shape id validation (namespace#Name with optional $member).
// ABOUTME: Ensures every segment is a valid Smithy identifier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace of the built-in prelude shapes and traits.
pub const PRELUDE_NAMESPACE: &str = "smithy.api";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeIdError {
    #[error("shape id cannot be empty")]
    Empty,

    #[error("shape id must be absolute (namespace#Name): {0}")]
    MissingNamespace(String),

    #[error("invalid namespace: '{0}'")]
    InvalidNamespace(String),

    #[error("invalid shape name: '{0}'")]
    InvalidName(String),

    #[error("invalid member name: '{0}'")]
    InvalidMember(String),
}

/// An absolute shape id such as `smithy.example#Widget` or
/// `smithy.example#Widget$name`.
///
/// Ordering follows namespace, then name, then member, so a structure sorts
/// directly before its members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId {
    namespace: String,
    name: String,
    member: Option<String>,
}

impl ShapeId {
    pub fn new(value: &str) -> Result<Self, ShapeIdError> {
        if value.is_empty() {
            return Err(ShapeIdError::Empty);
        }

        let (namespace, rest) = value
            .split_once('#')
            .ok_or_else(|| ShapeIdError::MissingNamespace(value.to_string()))?;

        if !namespace.split('.').all(is_identifier) {
            return Err(ShapeIdError::InvalidNamespace(namespace.to_string()));
        }

        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (rest, None),
        };

        if !is_identifier(name) {
            return Err(ShapeIdError::InvalidName(name.to_string()));
        }

        if let Some(member) = member.filter(|m| !is_identifier(m)) {
            return Err(ShapeIdError::InvalidMember(member.to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: member.map(str::to_string),
        })
    }

    /// Id of a shape in the `smithy.api` prelude. Callers pass literal
    /// identifiers, so no validation is repeated here.
    pub(crate) fn prelude(name: &str) -> Self {
        Self {
            namespace: PRELUDE_NAMESPACE.to_string(),
            name: name.to_string(),
            member: None,
        }
    }

    /// Build the id of a member of this shape.
    pub fn with_member(&self, member: &str) -> Result<Self, ShapeIdError> {
        if self.member.is_some() || !is_identifier(member) {
            return Err(ShapeIdError::InvalidMember(member.to_string()));
        }

        Ok(Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(member.to_string()),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    pub fn is_member(&self) -> bool {
        self.member.is_some()
    }
}

// Identifiers start with a letter or underscore, continue with letters,
// digits or underscores, and are never underscores alone.
fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }

    value.chars().any(|c| c != '_')
}

impl FromStr for ShapeId {
    type Err = ShapeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${member}")?;
        }
        Ok(())
    }
}

impl Serialize for ShapeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShapeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
