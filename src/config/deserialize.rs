// ABOUTME: Custom serde deserializers for rule configuration.
// ABOUTME: Accepts disallowed traits as bare ids or as {trait, label} entries.

use nonempty::NonEmpty;
use serde::Deserialize;

use crate::model::TraitId;
use crate::validation::DisallowedTrait;

pub fn deserialize_disallowed<'de, D>(deserializer: D) -> Result<NonEmpty<DisallowedTrait>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<DisallowedEntry> = Vec::deserialize(deserializer)?;
    let checks = values
        .into_iter()
        .map(|entry| entry.into_disallowed())
        .collect::<Result<Vec<_>, _>>()
        .map_err(serde::de::Error::custom)?;

    NonEmpty::from_vec(checks)
        .ok_or_else(|| serde::de::Error::custom("at least one disallowed trait is required"))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DisallowedEntry {
    Simple(String),
    Detailed(DetailedEntry),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DetailedEntry {
    #[serde(rename = "trait")]
    trait_id: String,
    #[serde(default)]
    label: Option<String>,
}

impl DisallowedEntry {
    fn into_disallowed(self) -> Result<DisallowedTrait, String> {
        match self {
            DisallowedEntry::Simple(trait_id) => parse_labelled_by_name(&trait_id),
            DisallowedEntry::Detailed(DetailedEntry {
                trait_id,
                label: None,
            }) => parse_labelled_by_name(&trait_id),
            DisallowedEntry::Detailed(DetailedEntry {
                trait_id,
                label: Some(label),
            }) => DisallowedTrait::new(&trait_id, &label).map_err(|e| e.to_string()),
        }
    }
}

fn parse_labelled_by_name(trait_id: &str) -> Result<DisallowedTrait, String> {
    trait_id
        .parse::<TraitId>()
        .map(DisallowedTrait::labelled_by_name)
        .map_err(|e| e.to_string())
}
