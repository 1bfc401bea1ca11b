#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for summarizing a PDF of student transcripts.
//!
//! ```text
//! transcripts Transcripts-S21.pdf
//! transcripts Transcripts-S21.pdf Awards-S21.xlsx
//! ```
//!
//! The input is read from the configured input directory and the summary
//! is written to the configured output directory.

use std::path::PathBuf;

use clap::Parser;
use transcripts_analyze::analyze_transcripts;
use transcripts_cli_utils::IndicatifProgress;
use transcripts_config::TranscriptConfig;

#[derive(Parser)]
#[command(
    name = "transcripts",
    about = "Summarize student performance by subject from a PDF of transcripts"
)]
struct Cli {
    /// Transcript PDF, relative to the input directory
    input: String,
    /// Output spreadsheet (.xlsx, .csv, or .json), relative to the output
    /// directory
    output: Option<String>,
    /// Ignored; only the first two arguments are used
    #[arg(hide = true)]
    extra: Vec<String>,
    /// TOML file overriding the built-in configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = transcripts_cli_utils::init_logger();
    let cli = Cli::parse();

    if !cli.extra.is_empty() {
        println!("Warning: Using only first two arguments.");
        log::debug!("Ignored arguments: {:?}", cli.extra);
    }

    let config = match &cli.config {
        Some(path) => TranscriptConfig::load(path)?,
        None => TranscriptConfig::default(),
    };

    println!("Analyzing transcripts...");
    let progress = IndicatifProgress::students_bar(&multi, "Reading transcripts");
    let table = analyze_transcripts(&config, &cli.input, cli.output.as_deref(), &progress)?;
    log::info!(
        "Summary has {} row(s) and {} column(s)",
        table.len(),
        table.columns.len()
    );
    println!("All done!");

    Ok(())
}
