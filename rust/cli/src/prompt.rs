//! Human seats: the action comes from whoever is at the keyboard.

use crate::console::Console;
use std::cell::RefCell;
use twentyone_engine::errors::GameError;
use twentyone_engine::game::ActionProvider;
use twentyone_engine::player::{Player, PlayerAction};

pub const OPTION_PROMPT: &str = "Please enter an option: ";

/// Asks on the console for one of the offered options.
pub struct HumanPrompt<'c, 'a> {
    console: &'c RefCell<Console<'a>>,
    name: String,
}

impl<'c, 'a> HumanPrompt<'c, 'a> {
    pub fn new(console: &'c RefCell<Console<'a>>, name: impl Into<String>) -> Self {
        Self {
            console,
            name: name.into(),
        }
    }
}

impl ActionProvider for HumanPrompt<'_, '_> {
    fn choose_action(
        &mut self,
        player: &Player,
        options: &[PlayerAction],
    ) -> Result<PlayerAction, GameError> {
        let allowed: Vec<u32> = options.iter().map(|a| a.choice()).collect();
        let choice = self
            .console
            .borrow_mut()
            .prompt_int(OPTION_PROMPT, &allowed)
            .map_err(|e| GameError::Io(e.to_string()))?;

        choice
            .and_then(PlayerAction::from_choice)
            .ok_or_else(|| GameError::InputClosed {
                name: player.name().to_string(),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
