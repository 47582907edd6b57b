//! Primes CLI - Command Line Interface for primality and factorization
//!
//! A small CLI for testing primality, factoring integers, and inspecting the
//! primes accumulated by the process-wide cache.

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

mod commands;

use commands::{check::CheckCommand, factor::FactorCommand, scan::ScanCommand, Command};

#[derive(Parser)]
#[command(
    name = "primes",
    version = env!("CARGO_PKG_VERSION"),
    about = "Primality testing and prime factorization CLI",
    long_about = "Test integers for primality, compute prime factorizations, and inspect the primes discovered along the way."
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON output format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute prime factorizations
    #[command(name = "factor", alias = "f")]
    Factor(FactorCommand),

    /// Test integers for primality
    #[command(name = "check", alias = "c")]
    Check(CheckCommand),

    /// Sweep a range and print the accumulated primes
    #[command(name = "scan", alias = "s")]
    Scan(ScanCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli)?;

    debug!("Primes CLI v{} starting", env!("CARGO_PKG_VERSION"));

    // Execute command
    let result = match cli.command {
        Commands::Factor(cmd) => cmd.execute(cli.json),
        Commands::Check(cmd) => cmd.execute(cli.json),
        Commands::Scan(cmd) => cmd.execute(cli.json),
    };

    match result {
        Ok(_) => {
            if !cli.quiet {
                info!("Command completed successfully");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
