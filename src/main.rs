//! Sportscast - GitHub activity aggregation and ranking engine
//!
//! CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use sportscast::config::Config;

// =============================================================================
// CLI Definition
// =============================================================================

/// Sportscast - GitHub activity aggregation and ranking engine
#[derive(Parser)]
#[command(name = "sportscast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demo workload and print the resulting rankings
    Demo {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Replay a JSONL event file and print per-metric and overall rankings
    Replay {
        /// Path to the JSONL event file
        file: PathBuf,
        /// Show only this metric
        #[arg(long, short)]
        metric: Option<String>,
        /// Maximum entries per table
        #[arg(long, short)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sportscast error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the CLI and return the exit code.
fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { json, quiet } => run_demo(json, quiet),
        Commands::Replay {
            file,
            metric,
            limit,
            json,
            quiet,
        } => run_replay(&file, metric, limit, json, quiet),
    }
}

// =============================================================================
// Command Implementations
// =============================================================================

/// Convert a success boolean to an exit code.
fn success_to_exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_demo(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use sportscast::cli::demo::{DemoCommand, DemoOptions};

    let config = Config::load();

    let cmd = DemoCommand::new(config);
    let options = DemoOptions { json, quiet };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_replay(
    file: &std::path::Path,
    metric: Option<String>,
    limit: Option<usize>,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use sportscast::cli::replay::{ReplayCommand, ReplayOptions};

    let config = Config::load();

    let cmd = ReplayCommand::new(config);
    let options = ReplayOptions {
        json,
        quiet,
        metric,
        limit,
    };

    let output = cmd.run(file, &options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

// =============================================================================
// Tests
// =============================================================================
