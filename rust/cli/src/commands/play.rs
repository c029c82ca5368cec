//! # Play Command
//!
//! Runs one game of Twenty One on the console.
//!
//! - **Solo**: `Player 1` at the keyboard against the scripted CPU opponent
//! - **Local multiplayer**: 2 to 15 players taking turns at the same keyboard
//!
//! Dice are seeded from the configuration when a seed is set, otherwise from
//! fresh entropy. The seed is logged at `info` so any game can be replayed.

use crate::config::Config;
use crate::console::Console;
use crate::error::CliError;
use crate::prompt::HumanPrompt;
use crate::view::ConsoleView;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use tracing::info;
use twentyone_ai::create_ai;
use twentyone_engine::dice::Dice;
use twentyone_engine::errors::GameError;
use twentyone_engine::game::{ActionProvider, CPU_PLAYER_NAME, Game, GameMode};

/// Handle the `solo` and `multi` commands.
///
/// # Arguments
///
/// * `mode` - Seats to play with
/// * `config` - Resolved settings (seed, CPU delay, opponent kind)
/// * `stdin` - Input stream for player choices
/// * `out` - Output stream for game display
///
/// # Returns
///
/// `Ok(())` when the game ends, including when input runs out mid-game.
pub fn handle_play_command(
    mode: GameMode,
    config: &Config,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let console = RefCell::new(Console::new(stdin, out));
    play_game(mode, config, &console)
}

/// Plays one game on an existing console.
pub(crate) fn play_game(
    mode: GameMode,
    config: &Config,
    console: &RefCell<Console<'_>>,
) -> Result<(), CliError> {
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, ?mode, "starting game");

    let mut game = Game::for_mode(mode, Dice::new_with_seed(seed))?;
    let mut providers: Vec<Box<dyn ActionProvider + '_>> = Vec::new();
    for name in mode.seat_names() {
        if mode == GameMode::Solo && name == CPU_PLAYER_NAME {
            providers.push(create_ai(&config.ai, config.cpu_delay())?);
        } else {
            providers.push(Box::new(HumanPrompt::new(console, name)));
        }
    }

    let mut view = ConsoleView::new(console);
    match game.run(&mut providers, &mut view) {
        Ok(_) => Ok(()),
        Err(GameError::InputClosed { name }) => {
            info!(%name, round = game.rounds_played() + 1, "input closed, abandoning game");
            writeln!(console.borrow_mut().out(), "{} left the game.", name)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
