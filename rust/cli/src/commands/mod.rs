//! Command handler modules for the pokersim CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod classify;
pub mod deal;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use deal::handle_deal_command;
pub use sim::{handle_sim_command, SimOptions};
