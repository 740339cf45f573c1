//! Bulls and Cows - CLI
//!
//! Solves 4-digit distinct-digit secrets by candidate elimination and
//! reports guess-count statistics over secret ranges.

use anyhow::Result;
use bulls_cows::{
    commands::{run_play, run_sweep, solve_secret},
    output::{print_solve_report, print_sweep_statistics},
    solver::RandomPicker,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows solver narrowing a candidate pool by feedback consistency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lowest secret considered
    #[arg(long, global = true, default_value_t = 1234)]
    start: u32,

    /// Highest secret considered
    #[arg(long, global = true, default_value_t = 9876)]
    stop: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every admissible secret in the range and report statistics (default)
    Sweep,

    /// Solve a specific secret and show the narrowing trace
    Solve {
        /// The secret to solve
        secret: u32,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Interactive mode: the solver guesses a number you hold
    Play,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to a full range sweep if no command given
    let command = cli.command.unwrap_or(Commands::Sweep);

    match command {
        Commands::Sweep => run_sweep_command(cli.start, cli.stop),
        Commands::Solve { secret, verbose } => {
            run_solve_command(secret, verbose, cli.start, cli.stop)
        }
        Commands::Play => run_play_command(cli.start, cli.stop),
    }
}

fn run_sweep_command(start: u32, stop: u32) -> Result<()> {
    let stats = run_sweep(start, stop, &mut RandomPicker);
    print_sweep_statistics(&stats);
    Ok(())
}

fn run_solve_command(secret: u32, verbose: bool, start: u32, stop: u32) -> Result<()> {
    let report =
        solve_secret(secret, start, stop, &mut RandomPicker).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_report(&report, verbose);
    Ok(())
}

fn run_play_command(start: u32, stop: u32) -> Result<()> {
    run_play(start, stop, &mut RandomPicker).map_err(|e| anyhow::anyhow!(e))
}
