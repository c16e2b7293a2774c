//! Properties Reconciler CLI
//!
//! The command-line interface for reconciling key=value properties
//! files against a desired set.

mod cli;
mod commands;
mod error;
mod properties;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Apply(args)) => commands::run_apply(&args),
        Some(Commands::Remove(args)) => commands::run_remove(&args),
        None => {
            // No command provided - show help hint
            println!("{} Properties Reconciler CLI", "props".green().bold());
            println!();
            println!("Run {} for available commands.", "props --help".cyan());
            Ok(())
        }
    }
}
