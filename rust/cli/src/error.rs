//! Error types for the CLI application.
//!
//! This module defines the error type used throughout the CLI for error
//! propagation with `?`. Every variant maps to exit code 2.

use std::fmt;

use pokersim_engine::errors::{CardError, DeckError, SimulationError};

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<CardError> for CliError {
    fn from(error: CardError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<DeckError> for CliError {
    fn from(error: DeckError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<SimulationError> for CliError {
    fn from(error: SimulationError) -> Self {
        match error {
            SimulationError::ZeroTrials | SimulationError::ZeroHits => {
                CliError::InvalidInput(error.to_string())
            }
            other => CliError::Engine(other.to_string()),
        }
    }
}
