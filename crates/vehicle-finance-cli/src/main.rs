mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::catalog::{QuoteArgs, VehiclesArgs};
use commands::loan::{ScheduleArgs, SimulateArgs};

/// Vehicle loan quoting and amortization
#[derive(Parser)]
#[command(
    name = "vfin",
    version,
    about = "Vehicle loan quoting and amortization",
    long_about = "A CLI for quoting fixed-rate vehicle loans with decimal precision. \
                  Supports a standalone simulator, per-vehicle quotes against the \
                  showroom catalog, month-by-month amortization schedules and \
                  calendar-correct loan end dates."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Standalone loan simulator (price entered directly)
    Simulate(SimulateArgs),
    /// Quote financing for a showroom vehicle
    Quote(QuoteArgs),
    /// Month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// List the showroom catalog
    Vehicles(VehiclesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::loan::run_simulate(args),
        Commands::Quote(args) => commands::catalog::run_quote(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Vehicles(args) => commands::catalog::run_vehicles(args),
        Commands::Version => {
            println!("vfin {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
