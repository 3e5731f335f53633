//! Sort the teams of each venue by name in a venue details JSON file
//!
//! The file is rewritten in place. Venue order is kept as found.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use showcase_reports::sort_venue_details;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Venue details JSON file, rewritten in place
    #[arg(short, long, default_value = "VenueDetails.json")]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let sorted = sort_venue_details(&json)?;
    fs::write(&args.input, sorted)
        .with_context(|| format!("Failed to write {}", args.input.display()))?;

    info!("✅ Teams sorted by name in every venue of {}", args.input.display());
    Ok(())
}
