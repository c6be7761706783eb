//! `clashes` CLI — report overlapping meetings and meetings outside working
//! hours for one day.
//!
//! ## Usage
//!
//! ```sh
//! # Check today's schedule
//! clashes -i meetings.csv
//!
//! # Check a specific day
//! clashes -i meetings.csv -d 2022-01-26
//!
//! # Show how rows were interpreted
//! RUST_LOG=clash_engine=debug clashes -i meetings.csv
//! ```
//!
//! The input file starts with a header line, followed by `start,end` rows.
//! A row with only a start (`9:30am,`) or only an end (`,6:00pm`) sets the
//! working-day bound.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use clash_engine::meeting::DAY_FORMAT;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "clashes",
    version,
    about = "Report which meetings are clashing with one another"
)]
struct Cli {
    /// Input file with one `start,end` row per meeting, after a header line
    #[arg(short, long)]
    infile: String,

    /// Day to check, in format YYYY-MM-DD (defaults to today)
    #[arg(short, long, value_parser = parse_day)]
    day: Option<NaiveDate>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let day = cli
        .day
        .map_or_else(clash_engine::meeting::today, |d| d.format(DAY_FORMAT).to_string());

    let content = std::fs::read_to_string(&cli.infile)
        .with_context(|| format!("Failed to read file: {}", cli.infile))?;
    let lines: Vec<&str> = content.lines().collect();
    info!(infile = %cli.infile, %day, rows = lines.len().saturating_sub(1), "analyzing schedule");

    let report = clash_engine::analyze(&lines, &day)
        .with_context(|| format!("Failed to analyze meetings in {}", cli.infile))?;

    if report.is_clean() {
        println!("No conflicts for {}", report.day);
    } else {
        print!("{}", report);
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_day(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", raw, e))
}
