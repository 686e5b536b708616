//! CLI argument parsing for conf2json and rename-ap
//!
//! This module provides the command-line interfaces using clap derive macros.
//!
//! # conf2json options
//!
//! - `--input` / `-i`: Source `.conf` file (env: CONF2JSON_INPUT)
//! - `--output` / `-o`: Destination JSON file (env: CONF2JSON_OUTPUT)
//! - `--config` / `-c`: Optional YAML configuration (env: CONF2JSON_CONFIG)
//! - `--dry-run`: Print the JSON to stdout instead of writing a file
//! - `--log-level` / `-l`: Log level (env: CONF2JSON_LOG_LEVEL)
//!
//! # rename-ap options
//!
//! - `[DIR]`: Root directory to scan (default: current directory)
//! - `--suffix` / `-s`: Suffix to append (overrides config file)
//! - `--config` / `-c`, `--log-level` / `-l`, `--dry-run`: as above
//!
//! # Precedence
//!
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// conf2json - Convert Surge/Quantumult X rewrite rules to JSON
///
/// Reads a `.conf` file with `<pattern> url 302 <target>` lines and writes
/// a JSON array of redirect rules.
#[derive(Parser, Debug)]
#[command(name = "conf2json")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ConvertCli {
    /// Input .conf file path
    #[arg(short, long, value_name = "FILE", env = "CONF2JSON_INPUT")]
    pub input: PathBuf,

    /// Output .json file path (defaults to the input path with a .json extension)
    #[arg(short, long, value_name = "FILE", env = "CONF2JSON_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", env = "CONF2JSON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print converted rules to stdout without writing a file
    #[arg(long)]
    pub dry_run: bool,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        env = "CONF2JSON_LOG_LEVEL"
    )]
    pub log_level: LogLevel,
}

/// rename-ap - Append a suffix to image filenames in a directory tree
#[derive(Parser, Debug)]
#[command(name = "rename-ap")]
#[command(author, version, about, long_about = None)]
pub struct RenameCli {
    /// Root directory to scan
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Suffix appended to each file stem (overrides config file)
    #[arg(short, long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", env = "CONF2JSON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show what would be renamed without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        env = "CONF2JSON_LOG_LEVEL"
    )]
    pub log_level: LogLevel,
}

/// Log level options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level - per-rule details
    Debug,
    /// Info level - default
    Info,
    /// Warn level
    Warn,
    /// Error level - least verbose
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
