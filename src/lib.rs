// ABOUTME: Library root for traitlint - validates Smithy models for disallowed traits.
// ABOUTME: Exposes the model, validated types, and the trait presence rule.

pub mod config;
pub mod error;
pub mod model;
pub mod types;
pub mod validation;

pub use model::{Model, Shape, ShapeType, TraitId, TraitValue};
pub use validation::{Severity, TraitPresenceRule, ValidationEvent, Validator};
