//! Error types for conf2json
//!
//! This module defines the error types used by the converter and the renamer.

use std::path::PathBuf;
use thiserror::Error;

/// Conversion errors
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input file does not exist
    #[error("Input file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// Input file is not valid UTF-8
    #[error("Input file '{}' is not valid UTF-8", .0.display())]
    InvalidEncoding(PathBuf),

    /// Input file could not be read
    #[error("Failed to read input file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule line that could not be split into pattern and target
    #[error("Malformed rule at line {line}: {content}")]
    MalformedLine { line: usize, content: String },

    /// No unique name could be generated within the attempt limit
    #[error("Unable to generate a unique name for rule '{pattern}' after {attempts} attempts")]
    NameExhausted { pattern: String, attempts: usize },

    /// Output file could not be written
    #[error("Failed to write JSON file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule list could not be serialized
    #[error("Failed to serialize rules: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    /// File-level errors abort the conversion early but are not fatal to the process
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            ConvertError::InputNotFound(_)
                | ConvertError::InvalidEncoding(_)
                | ConvertError::Read { .. }
        )
    }
}

/// Renamer errors
#[derive(Error, Debug)]
pub enum RenameError {
    /// Root directory does not exist or is not a directory
    #[error("Directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    /// A single rename call failed
    #[error("Failed to rename '{}' -> '{}': {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for conversion
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Result type alias for renaming
pub type RenameResult<T> = Result<T, RenameError>;
