//! conf2json - Surge/Quantumult X rewrite rules to JSON
//!
//! Converts a `.conf` rewrite file into a JSON array of redirect rules.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use conf2json::{
    cli::ConvertCli,
    config::Config,
    converter::{convert_file, read_conf, to_json_string, Converter},
};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = ConvertCli::parse();

    // Initialize logging
    conf2json::init_logging(cli.log_level.into())?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting conf2json");

    // Load configuration
    let config = Config::load_or_default(cli.config.as_deref())?;
    let converter = Converter::from_config(&config.converter);

    if cli.dry_run {
        let content = read_conf(&cli.input)?;
        let rules = converter.convert_str(&content)?;
        println!("{}", to_json_string(&rules)?);
        return Ok(());
    }

    let report = convert_file(&converter, &cli.input, cli.output.as_deref())?;

    if report.written {
        println!("Converted {} rules", report.rules.len());
        println!("Output: {}", report.output_path.display());
    }

    Ok(())
}
