//! # winconfig: The Main Entry Point
//!
//! This module handles Command Line Interface (CLI) parsing, logging
//! initialization, and dispatching to the configuration invoker.
//!
//! Run bare from the build subdirectory, it invokes CMake against the
//! parent directory with the project's fixed Windows x86_64 argument
//! set and exits with CMake's own status.

use clap::{Parser, Subcommand};
use log::{error, LevelFilter};
use simplelog::{Config, SimpleLogger};

mod configure;
mod invariant_ppt;
mod runner;

/// The primary Command Line Interface (CLI) configuration.
///
/// Uses `clap` for sub-command parsing and help generation.
#[derive(Parser)]
#[command(name = "winconfig")]
#[command(about = "Configures the Windows x86_64 build by invoking CMake with a fixed argument set", long_about = None)]
struct Cli {
    /// The sub-command to execute; with none given, run the configuration.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print the exact cmake command line instead of running it.
    #[arg(long)]
    dry_run: bool,

    /// Turn on verbose logging.
    ///
    /// - `-v`: Debug
    /// - `-vv`: Trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Available sub-commands for winconfig.
#[derive(Subcommand)]
enum Commands {
    /// Print the cmake command this tool runs and exit.
    ///
    /// Read-only: no process is spawned, nothing is configured.
    Show,
}

fn main() {
    let cli = Cli::parse();

    // Determine log level based on verbosity flag
    let log_level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // Initialize logger
    // We ignore the result here as logging failure shouldn't crash the startup
    let _ = SimpleLogger::init(log_level, Config::default());

    match &cli.command {
        Some(Commands::Show) => {
            println!("{}", configure::command_line());
        }
        None => {
            if let Err(e) = configure::run_configure(&runner::SystemRunner, cli.dry_run) {
                error!("Failed to configure build: {}", e);
                // Reflect cmake's own code where one exists, 1 otherwise.
                std::process::exit(e.exit_code());
            }
        }
    }
}
