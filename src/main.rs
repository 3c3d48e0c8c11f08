//! Unity Asset Summary CLI
//!
//! Prints a JSON summary of one Unity asset bundle.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use unity_asset_summary::logging::init_logging;
use unity_asset_summary::{BinaryAssetParser, ReportBuilder};

#[derive(Parser)]
#[command(name = "unity-asset-summary")]
#[command(about = "Summarize a Unity asset bundle as JSON")]
#[command(version)]
struct Cli {
    /// Asset bundle or serialized asset file to inspect
    path: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let summary = ReportBuilder::new(BinaryAssetParser)
        .build(&cli.path)
        .with_context(|| format!("Failed to summarize {}", cli.path.display()))?;
    let json = summary
        .to_json_pretty()
        .context("Failed to serialize summary")?;

    println!("{}", json);
    Ok(())
}
