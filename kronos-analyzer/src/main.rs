mod report;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use kronos_fleet::{LogIndex, parse_log};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kronos-analyzer", version)]
#[command(about = "Offline inspection of KRONOS simulation logs - fleet summaries and train journeys")]
struct Args {
    /// Path to the simulation log (a JSON array of day records)
    #[arg(long, default_value = "simulation_log.json")]
    log: PathBuf,

    /// Track one train's monthly journey (e.g. TS-05)
    #[arg(long)]
    train: Option<String>,

    /// Show the plan and fleet snapshot for one logical day
    #[arg(long)]
    day: Option<u32>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let raw = fs::read_to_string(&args.log)
        .with_context(|| format!("cannot read simulation log at {}", args.log.display()))?;
    let days = parse_log(&raw)
        .with_context(|| format!("{} is not a valid simulation log document", args.log.display()))?;
    let index = LogIndex::load(days)
        .with_context(|| format!("{} holds no day records", args.log.display()))?;
    log::debug!("loaded {} day records from {}", index.day_count(), args.log.display());

    match (args.day, args.train.as_deref()) {
        (Some(day), train) => {
            match report::day_report(&index, day) {
                Some(text) => print_report(&text),
                None => println!("{}", format!("No data recorded for day {day}.").yellow()),
            }
            if let Some(id) = train {
                print_journey(&index, id);
            }
        }
        (None, Some(id)) => print_journey(&index, id),
        (None, None) => print_report(&report::final_status_table(&index)),
    }

    Ok(())
}

fn print_journey(index: &LogIndex, train_id: &str) {
    match report::journey_table(index, train_id) {
        Some(text) => print_report(&text),
        None => println!(
            "{}",
            format!("Train '{train_id}' does not appear anywhere in the log.").yellow()
        ),
    }
}

/// First line is a heading, the rest is tabular data.
fn print_report(text: &str) {
    let mut lines = text.lines();
    if let Some(heading) = lines.next() {
        println!("{}", heading.bold().cyan());
    }
    for line in lines {
        println!("{line}");
    }
}
