//! Tower Headless Balance Simulator
//!
//! Plays full tower runs with a scripted player and no UI, using the same
//! `RunState` state machine as the real game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N         Number of runs (default: 100)
//!   --seed N         Base RNG seed, run i uses seed+i (default: 42)
//!   --random         Seed every run from entropy
//!   --max-actions N  Per-run input cap (default: 10000)
//!   --floors N       Tower height (default: 20)
//!   --verbose        One line per run on stderr
//!   --json           Print the report as JSON

use std::process::ExitCode;
use tower_rpg::simulator::{run_simulation, SimConfig};

const USAGE: &str = "Usage: simulator [--runs N] [--seed N | --random] [--max-actions N] [--floors N] [--verbose] [--json]";

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a number"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} requires a number, got '{value}'"))
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.runs = parse_number("--runs", args.get(i))?;
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number("--seed", args.get(i))?);
            }
            "--random" => config.seed = None,
            "--max-actions" => {
                i += 1;
                config.max_actions_per_run = parse_number("--max-actions", args.get(i))?;
            }
            "--floors" => {
                i += 1;
                config.run_config.max_floor = parse_number("--floors", args.get(i))?;
            }
            "--verbose" => config.verbose = true,
            "--json" => config.json = true,
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let report = run_simulation(&config);

    if config.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", report.to_text());
    }
    ExitCode::SUCCESS
}
