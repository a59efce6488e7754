//! Offline running-order generator.
//!
//! Reads a registrations JSON export and prints the assembled schedule as
//! JSON.
//!
//! ```bash
//! generate-schedule registrations.json --start-time 09:30 --out schedule.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use festival_schedule::config::FestivalConfig;
use festival_schedule::models::{load_registrations_file, ClockTime};
use festival_schedule::scheduler;
use festival_schedule::services::ScheduleConfigPatch;

#[derive(Parser, Debug)]
#[command(name = "generate-schedule")]
#[command(about = "Generate the festival running order from registrations", long_about = None)]
struct Args {
    /// Registrations JSON (bare array or `{ "registrations": [...] }`)
    input: PathBuf,

    /// festival.toml with schedule defaults and section titles
    #[arg(long)]
    config: Option<PathBuf>,

    /// First item start, HH:MM
    #[arg(long)]
    start_time: Option<ClockTime>,

    /// Minutes per piece
    #[arg(long)]
    duration: Option<u32>,

    /// Minutes between pieces
    #[arg(long)]
    buffer: Option<u32>,

    /// Jury deliberation length in minutes (0 disables it)
    #[arg(long)]
    judging_break: Option<u32>,

    /// Write the schedule here instead of stdout
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::WARN),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let festival = match &args.config {
        Some(path) => FestivalConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FestivalConfig::default(),
    };

    let patch = ScheduleConfigPatch {
        start_time: args.start_time,
        duration_per_item: args.duration,
        buffer_between_items: args.buffer,
        judging_break_duration: args.judging_break,
    };
    let config = patch.apply(&festival.schedule_config()?);

    let registrations = load_registrations_file(&args.input)?;
    let schedule = scheduler::generate(&registrations, &config, &festival.section_metadata())
        .context("Schedule generation failed")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&schedule)?
    } else {
        serde_json::to_string(&schedule)?
    };

    match &args.out {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}
