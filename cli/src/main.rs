//! voltahash CLI
//!
//! Command-line front-end for hashing files and checksum verification.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "voltahash")]
#[command(about = "Hardware-accelerated non-cryptographic hash", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Seed to hash under
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, cli.seed)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: voltahash [FILE]... or voltahash --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, cli.seed)?;
        }
    }

    Ok(())
}
