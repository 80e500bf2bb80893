// ABOUTME: Crate-wide error types for traitlint.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::types::{ShapeId, ShapeIdError, TraitLabelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("shape already defined in model: {0}")]
    DuplicateShape(ShapeId),

    #[error("invalid shape id: {0}")]
    InvalidShapeId(#[from] ShapeIdError),

    #[error("invalid trait label: {0}")]
    InvalidLabel(#[from] TraitLabelError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
