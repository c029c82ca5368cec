//! Rules command handler.

use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Print the rules of the game.
pub fn handle_rules_command(out: &mut dyn Write) -> Result<(), CliError> {
    ui::display_rules(out)?;
    Ok(())
}
