//! Conversion engine - `.conf` text to redirect rules
//!
//! A single linear pass over the input lines. The character name and the
//! current group live in an explicit [`ParseState`] owned by the pass.

use crate::config::ConverterConfig;
use crate::error::ConvertResult;

use super::classifier::{classify_line, split_lines, split_rule, LineKind};
use super::model::RedirectRule;
use super::naming::{NameGenerator, NameRegistry};
use super::normalizer::PatternNormalizer;
use super::resource::extract_resource_info;

/// Mutable state of one conversion pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState {
    /// Group of the most recently converted rule
    pub current_group: String,
    /// Character announced by the last marker line
    pub character_name: String,
}

impl ParseState {
    /// Fresh state with the given fallback group
    pub fn new(unknown_group: impl Into<String>) -> Self {
        Self {
            current_group: unknown_group.into(),
            character_name: String::new(),
        }
    }
}

/// Rule converter
///
/// Holds the immutable conversion settings; every call to
/// [`Converter::convert_str`] starts from a fresh [`ParseState`].
#[derive(Debug, Clone)]
pub struct Converter {
    normalizer: PatternNormalizer,
    names: NameGenerator,
    max_name_attempts: usize,
}

impl Converter {
    /// Create a converter from its parts
    pub fn new(
        normalizer: PatternNormalizer,
        names: NameGenerator,
        max_name_attempts: usize,
    ) -> Self {
        Self {
            normalizer,
            names,
            max_name_attempts,
        }
    }

    /// Create a converter from configuration
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(
            PatternNormalizer::new(config.replacements.clone()),
            NameGenerator::from_config(config),
            config.max_name_attempts,
        )
    }

    /// Convert `.conf` content into redirect rules
    ///
    /// Malformed rule lines are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::NameExhausted` if a unique rule name cannot be
    /// generated; this aborts the whole conversion.
    pub fn convert_str(&self, content: &str) -> ConvertResult<Vec<RedirectRule>> {
        let mut state = ParseState::new(self.names.unknown_group());
        let mut registry = NameRegistry::new(self.max_name_attempts);
        let mut rules = Vec::new();

        for (index, raw) in split_lines(content).enumerate() {
            let line_no = index + 1;

            let (enabled, body) = match classify_line(raw) {
                LineKind::Blank | LineKind::Ignored => continue,
                LineKind::CharacterMarker(name) => {
                    tracing::info!(character = %name, line = line_no, "Found character marker");
                    state.character_name = name.to_string();
                    continue;
                }
                LineKind::Rule { enabled, body } => (enabled, body),
            };

            let parts = match split_rule(body, line_no) {
                Ok(parts) => parts,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed rule line");
                    continue;
                }
            };

            let pattern = self.normalizer.normalize(parts.pattern);
            let info = extract_resource_info(parts.pattern, parts.target);
            let generated = self.names.generate(&info, &state.character_name);
            state.current_group = generated.group;

            let name = registry.claim(&generated.name, &pattern)?;

            tracing::debug!(
                line = line_no,
                enabled,
                original_pattern = %parts.pattern,
                pattern = %pattern,
                target = %parts.target,
                resource_type = %info.resource_type,
                dir = %info.dir_name,
                sub_dir = %info.sub_dir,
                name = %name,
                group = %state.current_group,
                "Converted rule"
            );

            rules.push(RedirectRule::new(
                enabled,
                name,
                pattern,
                state.current_group.clone(),
                parts.target,
            ));
        }

        Ok(rules)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}
