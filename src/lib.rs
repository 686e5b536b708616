//! conf2json library
//!
//! This crate converts Surge/Quantumult X rewrite rule files into JSON
//! redirect rule lists, and provides the batch suffix renamer used to
//! prepare the image assets those rules point at.

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod renamer;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize the logging subsystem
///
/// Logs are written to stderr so that stdout can carry program output.
///
/// # Arguments
/// * `level` - Default level, used when `RUST_LOG` is not set
///
/// # Errors
/// Returns an error if the logging system fails to initialize
pub fn init_logging(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
