// ABOUTME: Validator contract and the rules shipped with traitlint.
// ABOUTME: A validator maps a model to zero or more validation events.

mod event;
mod trait_presence;

pub use event::{Severity, ValidationEvent};
pub use trait_presence::{DEFAULT_RULE_NAME, DisallowedTrait, TraitPresenceRule};
pub(crate) use trait_presence::ensure_valid;

use crate::model::Model;

/// A rule the host pipeline runs against a fully built model.
///
/// Validators hold no state across calls and never mutate the model, so one
/// instance can be shared across threads.
pub trait Validator: Send + Sync {
    /// Name reported as the `id` of every event this validator emits.
    fn name(&self) -> &str;

    fn validate(&self, model: &Model) -> Vec<ValidationEvent>;
}
