//! `meet` CLI — find common meeting slots between two calendars.
//!
//! ## Usage
//!
//! ```sh
//! # Solve the built-in two-person example
//! meet
//!
//! # Solve a scenario file
//! meet solve -i scenario.json
//!
//! # Read the scenario from stdin, override the minimum duration, print JSON
//! cat scenario.json | meet solve --min-duration 45 --json
//!
//! # Reject unsorted or out-of-bounds calendars instead of trusting them
//! meet solve -i scenario.json --strict-calendars
//!
//! # Read malformed time literals as zero instead of failing
//! meet solve -i scenario.json --lenient
//!
//! # Show each person's free intervals
//! meet free -i scenario.json
//!
//! # Print the built-in example as a scenario file
//! meet example > scenario.json
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` or pass `-v` for more detail.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use meeting_engine::{Calendar, ParseMode, Scenario, Slot, Validation};
use serde::Serialize;
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "meet",
    version,
    about = "Find common meeting slots between two calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find slots where both people are free for the minimum duration
    Solve {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Minimum meeting length in minutes (overrides the scenario's value)
        #[arg(long)]
        min_duration: Option<u32>,
    },
    /// Show each person's free intervals within their daily bounds
    Free {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// Print the built-in example scenario as JSON
    Example,
}

#[derive(Args)]
struct ScenarioArgs {
    /// Scenario JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Treat unparsable time components as zero instead of failing
    #[arg(long)]
    lenient: bool,
    /// Reject unsorted, overlapping, or out-of-bounds busy calendars
    #[arg(long)]
    strict_calendars: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl ScenarioArgs {
    fn parse_mode(&self) -> ParseMode {
        if self.lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        }
    }

    fn validation(&self) -> Validation {
        if self.strict_calendars {
            Validation::Checked
        } else {
            Validation::Unchecked
        }
    }

    fn load(&self) -> Result<Scenario> {
        let json = read_input(self.input.as_deref())?;
        Scenario::from_json(&json, self.parse_mode()).context("Failed to load scenario")
    }
}

#[derive(Serialize)]
struct FreeDto {
    person1: Vec<Slot>,
    person2: Vec<Slot>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        None => {
            let scenario = Scenario::example();
            let slots = scenario
                .solve(Validation::Unchecked)
                .context("Failed to solve the built-in example")?;
            print!("{}", render_slots(&slots));
        }
        Some(Commands::Solve {
            scenario: args,
            min_duration,
        }) => {
            let mut scenario = args.load()?;
            if let Some(minutes) = min_duration {
                scenario.minimum_duration_minutes = minutes;
            }
            info!(
                minimum_duration_minutes = scenario.minimum_duration_minutes,
                "solving scenario"
            );
            let slots = scenario
                .solve(args.validation())
                .context("Failed to compute meeting times")?;
            info!(slots = slots.len(), "found common slots");

            if args.json {
                println!("{}", serde_json::to_string_pretty(&slots.slots())?);
            } else {
                print!("{}", render_slots(&slots));
            }
        }
        Some(Commands::Free { scenario: args }) => {
            let scenario = args.load()?;
            let (free1, free2) = scenario
                .free_intervals(args.validation())
                .context("Failed to compute free intervals")?;

            if args.json {
                let dto = FreeDto {
                    person1: free1.slots(),
                    person2: free2.slots(),
                };
                println!("{}", serde_json::to_string_pretty(&dto)?);
            } else {
                println!("person1:");
                print!("{}", render_lines(&free1, "  "));
                println!("person2:");
                print!("{}", render_lines(&free2, "  "));
            }
        }
        Some(Commands::Example) => {
            let json = Scenario::example()
                .to_json_pretty()
                .context("Failed to render example scenario")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Logs go to stderr so that stdout carries only results.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={level},meeting_engine={level}", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn render_slots(slots: &Calendar) -> String {
    if slots.is_empty() {
        return "No common availability.\n".to_string();
    }
    render_lines(slots, "")
}

fn render_lines(intervals: &Calendar, indent: &str) -> String {
    intervals
        .iter()
        .map(|i| {
            format!(
                "{indent}{}-{} ({} min)\n",
                i.start,
                i.end,
                i.duration_minutes()
            )
        })
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
