// ABOUTME: Shape definitions and their applied traits.
// ABOUTME: A shape carries each trait at most once, keyed by trait id.

use super::traits::{TraitId, TraitValue};
use crate::types::ShapeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeType {
    Blob,
    Boolean,
    String,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Timestamp,
    Document,
    Enum,
    IntEnum,
    List,
    Map,
    Structure,
    Union,
    Member,
    Service,
    Operation,
    Resource,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeType::Blob => "blob",
            ShapeType::Boolean => "boolean",
            ShapeType::String => "string",
            ShapeType::Byte => "byte",
            ShapeType::Short => "short",
            ShapeType::Integer => "integer",
            ShapeType::Long => "long",
            ShapeType::Float => "float",
            ShapeType::Double => "double",
            ShapeType::BigInteger => "bigInteger",
            ShapeType::BigDecimal => "bigDecimal",
            ShapeType::Timestamp => "timestamp",
            ShapeType::Document => "document",
            ShapeType::Enum => "enum",
            ShapeType::IntEnum => "intEnum",
            ShapeType::List => "list",
            ShapeType::Map => "map",
            ShapeType::Structure => "structure",
            ShapeType::Union => "union",
            ShapeType::Member => "member",
            ShapeType::Service => "service",
            ShapeType::Operation => "operation",
            ShapeType::Resource => "resource",
        };
        write!(f, "{name}")
    }
}

/// A single named definition in a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    shape_type: ShapeType,
    traits: BTreeMap<TraitId, TraitValue>,
}

impl Shape {
    pub fn new(id: ShapeId, shape_type: ShapeType) -> Self {
        Self {
            id,
            shape_type,
            traits: BTreeMap::new(),
        }
    }

    /// Apply a trait, replacing any value previously applied under the same id.
    pub fn with_trait(mut self, trait_id: TraitId, value: impl Into<TraitValue>) -> Self {
        self.traits.insert(trait_id, value.into());
        self
    }

    /// Apply an annotation trait (empty object value).
    pub fn annotate(self, trait_id: TraitId) -> Self {
        self.with_trait(trait_id, TraitValue::annotation())
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn has_trait(&self, trait_id: &TraitId) -> bool {
        self.traits.contains_key(trait_id)
    }

    pub fn get_trait(&self, trait_id: &TraitId) -> Option<&TraitValue> {
        self.traits.get(trait_id)
    }

    pub fn traits(&self) -> impl Iterator<Item = (&TraitId, &TraitValue)> {
        self.traits.iter()
    }
}
