//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages and the fixed
//! screens of the game (main menu and rules).

use std::io::Write;

/// Main menu entries in the order they are numbered.
pub const MENU_ENTRIES: [&str; 4] = ["Solo", "Local Multiplayer", "Rules", "Exit"];

pub const RULES_TEXT: &str = "\
_____________________________________________________________________________
Twenty One is a game of chance where players take turns rolling two dice every
round until they decide to stop rolling and lock in their score or end up
going bust with a total over 21. The objective is to be the closest to 21
when everyone is done rolling.

Rules are as per follows:
- Players begin with a score of 0.
- Each player has one turn to either roll or stop rolling each round.
- Players can only do a regular roll of two dice until they
    reach a score of at least 14.
- Players with a score >= 14 have the option to only roll one dice.
- If a player scores more than 21 they go bust and are out of the game.
- The winning player is the one with the score closest to 21 when everyone
    has finished rolling.
- If all players go bust, no one wins.
- If more than one player has the winning score, no one wins.
_____________________________________________________________________________";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn display_main_menu(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "------------Main Menu------------")?;
    writeln!(out, "Welcome to Twenty One!")?;
    for (i, entry) in MENU_ENTRIES.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, entry)?;
    }
    writeln!(out, "---------------------------------")
}

pub fn display_rules(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULES_TEXT)?;
    writeln!(out)
}
