//! Rewrite rule conversion module
//!
//! Turns Surge/Quantumult X `<pattern> url 302 <target>` rewrite files into
//! JSON redirect rule lists:
//!
//! ```text
//! .conf → classifier → normalizer + resource extractor → name/group
//!       → de-duplication → Vec<RedirectRule> → JSON file
//! ```

pub mod classifier;
pub mod engine;
pub mod file;
pub mod model;
pub mod naming;
pub mod normalizer;
pub mod resource;

use std::path::{Path, PathBuf};

pub use classifier::{classify_line, split_lines, split_rule, LineKind, RuleParts};
pub use engine::{Converter, ParseState};
pub use file::{read_conf, resolve_output_path, to_json_string, write_rules};
pub use model::RedirectRule;
pub use naming::{GeneratedName, NameGenerator, NameRegistry};
pub use normalizer::PatternNormalizer;
pub use resource::{extract_resource_info, ResourceInfo, ResourceType};

use crate::error::ConvertResult;

/// Result of converting one file
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Converted rules, empty if the input could not be read
    pub rules: Vec<RedirectRule>,
    /// Resolved output path
    pub output_path: PathBuf,
    /// Whether the JSON file was written
    pub written: bool,
}

/// Convert a `.conf` file and write the JSON next to it (or to `output`)
///
/// File-level failures (missing input, invalid UTF-8) are logged and yield
/// an empty report. Write failures are logged and the rules are still
/// returned with `written == false`.
///
/// # Errors
///
/// Only `ConvertError::NameExhausted` is propagated.
pub fn convert_file(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
) -> ConvertResult<ConversionReport> {
    let output_path = resolve_output_path(input, output);

    tracing::info!(path = %input.display(), "Reading rule file");
    let content = match read_conf(input) {
        Ok(content) => content,
        Err(e) if e.is_file_level() => {
            tracing::error!(error = %e, "Aborting conversion");
            return Ok(ConversionReport {
                rules: Vec::new(),
                output_path,
                written: false,
            });
        }
        Err(e) => return Err(e),
    };
    tracing::info!(lines = split_lines(&content).count(), "Rule file loaded");

    let rules = converter.convert_str(&content)?;

    let written = match write_rules(&output_path, &rules) {
        Ok(()) => {
            tracing::info!(
                rules = rules.len(),
                path = %output_path.display(),
                "JSON written"
            );
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to write JSON output");
            false
        }
    };

    Ok(ConversionReport {
        rules,
        output_path,
        written,
    })
}
