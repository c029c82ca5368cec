//! Interactive main menu, shown when no subcommand is given.
//!
//! The menu loops until `4. Exit` is chosen or input runs out. Games started
//! from the menu return to it when they finish.

use crate::config::Config;
use crate::console::Console;
use crate::error::CliError;
use crate::ui;
use crate::validation::choice_range;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use tracing::debug;
use twentyone_engine::game::GameMode;
use twentyone_engine::rules::{MAX_PLAYERS, MIN_PLAYERS};

use super::play::play_game;

const MENU_PROMPT: &str = "Choose from the following options: ";
const PLAYERS_PROMPT: &str = "Number of players: ";
const RULES_PAUSE: &str = "Press enter to go back";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Solo,
    Multiplayer,
    Rules,
    Exit,
}

impl MenuChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Solo),
            2 => Some(Self::Multiplayer),
            3 => Some(Self::Rules),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Handle the interactive menu.
pub fn handle_menu_command(
    config: &Config,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let console = RefCell::new(Console::new(stdin, out));

    loop {
        let picked = {
            let mut c = console.borrow_mut();
            ui::display_main_menu(c.out())?;
            c.prompt_int(MENU_PROMPT, &choice_range(1, ui::MENU_ENTRIES.len() as u32))?
        };
        let Some(choice) = picked.and_then(MenuChoice::from_number) else {
            debug!("input closed at main menu");
            return Ok(());
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Solo => play_game(GameMode::Solo, config, &console)?,
            MenuChoice::Multiplayer => {
                let allowed = choice_range(MIN_PLAYERS as u32, MAX_PLAYERS as u32);
                let count = console.borrow_mut().prompt_int(PLAYERS_PROMPT, &allowed)?;
                let Some(count) = count else {
                    return Ok(());
                };
                play_game(GameMode::Multiplayer(count as usize), config, &console)?;
            }
            MenuChoice::Rules => {
                let mut c = console.borrow_mut();
                ui::display_rules(c.out())?;
                c.pause(RULES_PAUSE)?;
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}
