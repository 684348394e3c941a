//! NestKV CLI
//!
//! Interactive shell for the NestKV transactional key-value store.
//!
//! Reads one command per line (`SET`, `GET`, `UNSET`, `COUNTS`, `FIND`,
//! `BEGIN`, `COMMIT`, `ROLLBACK`, `END`), executes it against an in-process
//! engine and prints the result. Engine conditions and syntax errors are
//! reported and the session continues; `END` or end-of-input exits cleanly.

mod repl;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// NestKV interactive transactional key-value shell.
#[derive(Parser)]
#[command(name = "nestkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script file to execute line by line instead of reading stdin
    script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.script {
        Some(path) => repl::run_script(&path)?,
        None => repl::run_interactive()?,
    }

    Ok(())
}
