//! Rule name and group generation
//!
//! Names are built from the resource classification and the current
//! character name; [`NameRegistry`] then makes them unique across a run.

use std::collections::HashSet;

use crate::config::ConverterConfig;
use crate::error::{ConvertError, ConvertResult};

use super::resource::{ResourceInfo, ResourceType};

/// Generated base name and group label for one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    pub name: String,
    pub group: String,
}

/// Builds rule names and group labels
#[derive(Debug, Clone)]
pub struct NameGenerator {
    group_prefix: String,
    unknown_group: String,
}

impl NameGenerator {
    /// Create a generator with the given group prefix and fallback group
    pub fn new(group_prefix: impl Into<String>, unknown_group: impl Into<String>) -> Self {
        Self {
            group_prefix: group_prefix.into(),
            unknown_group: unknown_group.into(),
        }
    }

    /// Create a generator from converter configuration
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(&config.group_prefix, &config.unknown_group)
    }

    /// Group label used before any character is known
    pub fn unknown_group(&self) -> &str {
        &self.unknown_group
    }

    /// Generate the base name and group for a classified rule
    ///
    /// # Arguments
    ///
    /// * `info` - Resource classification of the rule
    /// * `character` - Character announced by the last marker line (may be empty)
    pub fn generate(&self, info: &ResourceInfo, character: &str) -> GeneratedName {
        let group_character = character.replace(' ', "_");
        let leaf = if info.sub_dir.is_empty() {
            &info.dir_name
        } else {
            &info.sub_dir
        };

        let (name, group) = match info.resource_type {
            ResourceType::Summon => (
                format!("summon-{}-{}", character, leaf),
                format!("{}-Summon-{}", self.group_prefix, group_character),
            ),
            ResourceType::Leader => (
                format!("leader-{}-{}", character, leaf),
                format!("{}-leader-{}", self.group_prefix, group_character),
            ),
            ResourceType::Npc => (
                format!("NPC-{}-{}", character, leaf),
                format!("{}-NPC-{}", self.group_prefix, group_character),
            ),
            ResourceType::Other if character.is_empty() => {
                (info.dir_name.clone(), self.unknown_group.clone())
            }
            ResourceType::Other => (
                format!("{}-{}", character, info.dir_name),
                format!("{}-{}", self.group_prefix, group_character),
            ),
        };

        GeneratedName {
            name: sanitize_name(&name),
            group,
        }
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}

/// Strip backslashes and replace spaces with underscores
pub fn sanitize_name(name: &str) -> String {
    name.replace('\\', "").replace(' ', "_")
}

/// Tracks names already emitted in one conversion run
#[derive(Debug, Clone)]
pub struct NameRegistry {
    taken: HashSet<String>,
    max_attempts: usize,
}

impl NameRegistry {
    /// Create an empty registry
    ///
    /// `max_attempts` counts the base name itself, so a limit of 100 tries
    /// `base`, `base_1` ... `base_99`.
    pub fn new(max_attempts: usize) -> Self {
        Self {
            taken: HashSet::new(),
            max_attempts,
        }
    }

    /// Claim a unique name derived from `base`
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::NameExhausted` when every candidate is taken.
    pub fn claim(&mut self, base: &str, pattern: &str) -> ConvertResult<String> {
        if self.max_attempts > 0 && self.taken.insert(base.to_string()) {
            return Ok(base.to_string());
        }

        for n in 1..self.max_attempts {
            let candidate = format!("{}_{}", base, n);
            if !self.taken.contains(&candidate) {
                self.taken.insert(candidate.clone());
                return Ok(candidate);
            }
        }

        Err(ConvertError::NameExhausted {
            pattern: pattern.to_string(),
            attempts: self.max_attempts,
        })
    }
}
