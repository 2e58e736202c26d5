//! JSON front end for the damage calculator.
//!
//! Reads a request from `--input <file>` (or stdin), runs it and prints the
//! result as JSON on stdout. Logs go to stderr.
//!
//! Usage:
//!   cargo run -p calc_runner -- calc --input request.json --pretty
//!   cargo run -p calc_runner -- bulk --input bulk.json --threads 4
//!   cargo run -p calc_runner -- search offensive --input search.json
//!   RUST_LOG=vgc_calc=debug cargo run -p calc_runner -- calc < request.json

mod cmd;
mod models;

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cmd::{bulk, calc, search};

#[derive(Parser)]
#[command(name = "calc_runner", about = "Gen 9 VGC damage calculator")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Damage of one move from one attacker into one defender
    Calc(calc::CalcArgs),

    /// Every defender x move x scenario combination
    Bulk(bulk::BulkArgs),

    /// Minimal EV investment searches
    Search(search::SearchArgs),
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = if verbose > 0 {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Write `value` to stdout as JSON.
pub fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize result")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write result")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command {
        Commands::Calc(args) => calc::execute(args, &cli.global),
        Commands::Bulk(args) => bulk::execute(args, &cli.global),
        Commands::Search(args) => search::execute(args, &cli.global),
    }
}
