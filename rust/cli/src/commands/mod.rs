//! Command handler modules for the Twenty One CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: input and output streams passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod menu;
mod play;
mod rules;

pub use cfg::handle_cfg_command;
pub use menu::handle_menu_command;
pub use play::handle_play_command;
pub use rules::handle_rules_command;
