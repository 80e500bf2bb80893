// ABOUTME: Validated domain types shared by the model and the rules.
// ABOUTME: Shape ids and trait labels are checked once at construction.

mod shape_id;
mod trait_label;

pub use shape_id::{PRELUDE_NAMESPACE, ShapeId, ShapeIdError};
pub use trait_label::{TraitLabel, TraitLabelError};
