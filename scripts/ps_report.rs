//! Generate readable text reports from the problem-statements JSON
//!
//! Writes a summary, a detailed listing, a per-theme breakdown and a keyword
//! search into the output directory, then logs the per-category counts.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use showcase_reports::{
    category_counts, parse_records, search_keywords, write_detailed, write_search, write_summary,
    write_themes, DEFAULT_KEYWORDS, DETAILED_FILE, SEARCH_FILE, SUMMARY_FILE, THEMES_FILE,
    TIMESTAMP_FORMAT,
};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Problem statements JSON file
    #[arg(short, long, default_value = "assets/data/PS.json")]
    input: PathBuf,

    /// Directory the reports are written to
    #[arg(short, long, default_value = "parsed_data")]
    output_dir: PathBuf,

    /// Keyword for the search report; repeat for several (default: built-in list)
    #[arg(short, long)]
    keyword: Vec<String>,
}

fn write_report(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(&mut out).with_context(|| format!("Failed to write {}", path.display()))?;
    out.flush()?;
    info!("✅ Saved {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let records = parse_records(&json)?;
    info!("Loaded {} problem statements", records.len());

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir).context("Failed to create output directory")?;
        info!("📁 Created directory: {}", args.output_dir.display());
    }

    let generated_on = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let keywords: Vec<String> = if args.keyword.is_empty() {
        DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
    } else {
        args.keyword
    };

    let dir = &args.output_dir;
    write_report(&dir.join(SUMMARY_FILE), |out| write_summary(out, &records, &generated_on))?;
    write_report(&dir.join(DETAILED_FILE), |out| write_detailed(out, &records, &generated_on))?;
    write_report(&dir.join(THEMES_FILE), |out| write_themes(out, &records, &generated_on))?;

    let matches = search_keywords(&records, &keywords);
    write_report(&dir.join(SEARCH_FILE), |out| {
        write_search(out, &matches, &keywords, &generated_on)
    })?;

    info!("Found {} problems matching the search keywords", matches.len());
    info!("Problems per category:");
    for (category, count) in category_counts(&records) {
        info!("  {}: {}", category, count);
    }

    Ok(())
}
