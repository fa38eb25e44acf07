//! # pokersim CLI Library
//!
//! This library provides the command-line interface for the pokersim engine:
//! Monte Carlo estimates of five-card hand probabilities plus helpers for
//! dealing and classifying single hands.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokersim", "simulate", "--target", "straight", "--trials", "100000"];
//! let code = pokersim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `simulate` (alias `sim`): Estimate how often a target hand appears
//! - `deal`: Deal a single hand for inspection
//! - `classify`: Classify five cards given on the command line
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, PokersimCli};
use commands::{
    SimOptions, handle_cfg_command, handle_classify_command, handle_deal_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["simulate", "deal", "classify", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pokersim", "deal", "--seed", "42"];
/// let code = pokersim_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokersimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Deal { seed } => {
            config::load()
                .map_err(CliError::from)
                .and_then(|cfg| handle_deal_command(seed.or(cfg.seed), out))
        }
        Commands::Classify { cards } => handle_classify_command(&cards, out),
        Commands::Simulate {
            target,
            trials,
            hits,
            first,
            seed,
            max_trials,
            output,
        } => {
            let opts = SimOptions {
                target: target.map(Into::into),
                trials,
                hits,
                first,
                seed,
                max_trials,
                output,
            };
            config::load()
                .map_err(CliError::from)
                .and_then(|cfg| handle_sim_command(&opts, &cfg, out, err))
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Usage: pokersim <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: pokersim --help");
            exit_code::ERROR
        }
    }
}
