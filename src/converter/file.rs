//! Input reading and JSON output

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};

use super::model::RedirectRule;

/// Read a `.conf` file fully into memory
///
/// # Errors
///
/// - `ConvertError::InputNotFound` if the file does not exist
/// - `ConvertError::InvalidEncoding` if it is not valid UTF-8
/// - `ConvertError::Read` for any other I/O failure
pub fn read_conf(path: &Path) -> ConvertResult<String> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| ConvertError::InvalidEncoding(path.to_path_buf()))
}

/// Explicit output path, or the input path with a `.json` extension
pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("json"),
    }
}

/// Serialize rules as a two-space indented JSON array
///
/// Non-ASCII characters are written literally.
pub fn to_json_string(rules: &[RedirectRule]) -> ConvertResult<String> {
    Ok(serde_json::to_string_pretty(rules)?)
}

/// Write rules to `path` as JSON
pub fn write_rules(path: &Path, rules: &[RedirectRule]) -> ConvertResult<()> {
    let json = to_json_string(rules)?;
    std::fs::write(path, json).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
