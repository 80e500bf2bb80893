// ABOUTME: Trait identifiers and trait values attached to shapes.
// ABOUTME: Prelude traits are enum variants; anything else is a custom shape id.

use crate::types::{PRELUDE_NAMESPACE, ShapeId, ShapeIdError};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifies a kind of trait.
///
/// Prelude traits the validators care about get their own variant. Every
/// other trait is carried as `Custom` with its absolute shape id. Build ids
/// through [`TraitId::from_shape_id`] or [`FromStr`] so that a prelude id
/// always maps to its variant and never to `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TraitId {
    ClientOptional,
    Input,
    Output,
    Required,
    Default,
    Error,
    Documentation,
    Custom(ShapeId),
}

impl TraitId {
    const PRELUDE: [TraitId; 7] = [
        TraitId::ClientOptional,
        TraitId::Input,
        TraitId::Output,
        TraitId::Required,
        TraitId::Default,
        TraitId::Error,
        TraitId::Documentation,
    ];

    pub fn from_shape_id(id: ShapeId) -> Self {
        if id.namespace() == PRELUDE_NAMESPACE && !id.is_member() {
            if let Some(known) = Self::PRELUDE.iter().find(|t| t.name() == id.name()) {
                return known.clone();
            }
        }
        TraitId::Custom(id)
    }

    /// The trait's shape name, e.g. `clientOptional`.
    pub fn name(&self) -> &str {
        match self {
            TraitId::ClientOptional => "clientOptional",
            TraitId::Input => "input",
            TraitId::Output => "output",
            TraitId::Required => "required",
            TraitId::Default => "default",
            TraitId::Error => "error",
            TraitId::Documentation => "documentation",
            TraitId::Custom(id) => id.name(),
        }
    }

    pub fn shape_id(&self) -> ShapeId {
        match self {
            TraitId::Custom(id) => id.clone(),
            prelude => ShapeId::prelude(prelude.name()),
        }
    }

    pub fn is_prelude(&self) -> bool {
        !matches!(self, TraitId::Custom(_))
    }
}

impl From<ShapeId> for TraitId {
    fn from(id: ShapeId) -> Self {
        Self::from_shape_id(id)
    }
}

impl FromStr for TraitId {
    type Err = ShapeIdError;

    /// Accepts absolute ids (`smithy.api#input`) and relative prelude names
    /// (`input`), which resolve against `smithy.api`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = if s.contains('#') {
            ShapeId::new(s)?
        } else {
            ShapeId::new(&format!("{PRELUDE_NAMESPACE}#{s}"))?
        };
        Ok(Self::from_shape_id(id))
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shape_id())
    }
}

impl Serialize for TraitId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TraitId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// The node value a trait is applied with. Annotation traits such as
/// `@input` carry an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TraitValue(serde_json::Value);

impl TraitValue {
    pub fn annotation() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl Default for TraitValue {
    fn default() -> Self {
        Self::annotation()
    }
}

impl From<serde_json::Value> for TraitValue {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
