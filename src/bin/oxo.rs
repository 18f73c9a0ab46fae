//! oxo - play Tic-Tac-Toe against an exhaustive-search engine
//!
//! The engine searches the full game tree on every move, so it never loses;
//! `selfplay` exists to demonstrate exactly that in bulk.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-Tac-Toe against an exhaustive-search engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::play::PlayArgs),

    /// Run batch engine-vs-opponent games and report the tallies
    Selfplay(oxo::cli::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::play::execute(args),
        Commands::Selfplay(args) => oxo::cli::selfplay::execute(args),
    }
}
