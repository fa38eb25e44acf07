//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! pokersim configuration settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "target": {
//!     "value": "straight",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "target": {
            "value": config.target,
            "source": sources.target,
        },
        "trials": {
            "value": config.trials,
            "source": sources.trials,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "max_trials": {
            "value": config.max_trials,
            "source": sources.max_trials,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
