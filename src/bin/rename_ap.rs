//! rename-ap - append a suffix to image filenames in a directory tree

use anyhow::Result;
use clap::Parser;

use conf2json::{cli::RenameCli, config::Config, renamer::Renamer};

fn main() -> Result<()> {
    let cli = RenameCli::parse();
    conf2json::init_logging(cli.log_level.into())?;

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(suffix) = cli.suffix {
        anyhow::ensure!(!suffix.is_empty(), "Suffix must not be empty");
        config.renamer.suffix = suffix;
    }

    let renamer = Renamer::from_config(&config.renamer);

    if cli.dry_run {
        let plans = renamer.plan(&cli.dir)?;
        for plan in &plans {
            println!("{} -> {}", plan.from.display(), plan.to.display());
        }
        println!("Would rename {} files", plans.len());
        return Ok(());
    }

    let report = renamer.run(&cli.dir)?;
    println!("Renamed {} files", report.renamed);
    if report.failed > 0 {
        println!("Failed to rename {} files", report.failed);
    }

    Ok(())
}
