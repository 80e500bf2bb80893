// ABOUTME: Rule that warns about every shape carrying a disallowed trait.
// ABOUTME: Defaults to flagging @clientOptional and @input.

use super::{ValidationEvent, Validator};
use crate::config::RuleConfig;
use crate::error::{Error, Result};
use crate::model::{Model, TraitId};
use crate::types::TraitLabel;
use nonempty::NonEmpty;

/// Event id used by the default rule.
pub const DEFAULT_RULE_NAME: &str = "ClientOptional";

/// A trait the rule rejects, with the label shown in its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisallowedTrait {
    pub trait_id: TraitId,
    pub label: TraitLabel,
}

impl DisallowedTrait {
    /// Parse a trait id (absolute or prelude-relative) and a label.
    pub fn new(trait_id: &str, label: &str) -> Result<Self> {
        Ok(Self {
            trait_id: trait_id.parse()?,
            label: TraitLabel::new(label)?,
        })
    }

    /// Reject `trait_id`, labelled by its shape name.
    pub fn labelled_by_name(trait_id: TraitId) -> Self {
        let label = TraitLabel::from(&trait_id);
        Self { trait_id, label }
    }
}

/// Emits one warning per (shape, disallowed trait) pair.
#[derive(Debug, Clone)]
pub struct TraitPresenceRule {
    name: String,
    checks: NonEmpty<DisallowedTrait>,
}

impl TraitPresenceRule {
    /// Fails when the name is blank or a trait is listed more than once,
    /// since a repeated trait would report the same shape twice.
    pub fn new(name: impl Into<String>, checks: NonEmpty<DisallowedTrait>) -> Result<Self> {
        let name = name.into();
        ensure_valid(&name, &checks)?;
        Ok(Self { name, checks })
    }

    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        Self::new(config.name.clone(), config.disallowed.clone())
    }

    /// Traits checked by [`Validator::validate`], in report order.
    pub fn checks(&self) -> &NonEmpty<DisallowedTrait> {
        &self.checks
    }

    /// One warning for each shape in `model` that carries `trait_id`.
    pub fn collect_findings(
        &self,
        model: &Model,
        trait_id: &TraitId,
        label: &TraitLabel,
    ) -> Vec<ValidationEvent> {
        let shapes = model.shapes_with_trait(trait_id);
        if shapes.is_empty() {
            tracing::debug!(rule = %self.name, %trait_id, "no shapes carry trait");
            return Vec::new();
        }

        tracing::debug!(rule = %self.name, %trait_id, matches = shapes.len(), "found disallowed trait");

        let message = format!("@{label} trait is not allowed");
        shapes
            .into_iter()
            .map(|shape| ValidationEvent::warning(&self.name, shape.id().clone(), &message))
            .collect()
    }
}

pub(crate) fn ensure_valid(name: &str, checks: &NonEmpty<DisallowedTrait>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidConfig("rule name cannot be empty".to_string()));
    }

    let mut seen = Vec::with_capacity(checks.len());
    for check in checks.iter() {
        if seen.contains(&&check.trait_id) {
            return Err(Error::InvalidConfig(format!(
                "trait listed more than once: {}",
                check.trait_id
            )));
        }
        seen.push(&check.trait_id);
    }

    Ok(())
}

impl Default for TraitPresenceRule {
    fn default() -> Self {
        let config = RuleConfig::default();
        Self {
            name: config.name,
            checks: config.disallowed,
        }
    }
}

impl Validator for TraitPresenceRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, model: &Model) -> Vec<ValidationEvent> {
        self.checks
            .iter()
            .flat_map(|check| self.collect_findings(model, &check.trait_id, &check.label))
            .collect()
    }
}
