// ABOUTME: Configuration types and parsing for the trait presence rule.
// ABOUTME: Loads the rule name and its disallowed traits from YAML.

mod deserialize;

use deserialize::deserialize_disallowed;

use crate::error::Result;
use crate::model::TraitId;
use crate::validation::{DEFAULT_RULE_NAME, DisallowedTrait, TraitPresenceRule, ensure_valid};
use nonempty::{NonEmpty, nonempty};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default = "default_rule_name")]
    pub name: String,

    #[serde(
        default = "default_disallowed",
        deserialize_with = "deserialize_disallowed"
    )]
    pub disallowed: NonEmpty<DisallowedTrait>,
}

fn default_rule_name() -> String {
    DEFAULT_RULE_NAME.to_string()
}

fn default_disallowed() -> NonEmpty<DisallowedTrait> {
    nonempty![
        DisallowedTrait::labelled_by_name(TraitId::ClientOptional),
        DisallowedTrait::labelled_by_name(TraitId::Input),
    ]
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            name: default_rule_name(),
            disallowed: default_disallowed(),
        }
    }
}

impl RuleConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading rule config");
        Self::from_yaml(&content)
    }

    pub fn rule(&self) -> Result<TraitPresenceRule> {
        TraitPresenceRule::from_config(self)
    }

    fn validate(&self) -> Result<()> {
        ensure_valid(&self.name, &self.disallowed)
    }
}
