//! Renders game events on the console.

use crate::console::Console;
use crate::formatters::{format_dice, format_option, supports_unicode};
use std::cell::RefCell;
use std::io::{self, Write};
use twentyone_engine::errors::GameError;
use twentyone_engine::events::{GameEvent, GameObserver};
use twentyone_engine::player::PlayerAction;

/// Game observer that prints every event as text.
pub struct ConsoleView<'c, 'a> {
    console: &'c RefCell<Console<'a>>,
    unicode: bool,
}

impl<'c, 'a> ConsoleView<'c, 'a> {
    pub fn new(console: &'c RefCell<Console<'a>>) -> Self {
        Self::with_unicode(console, supports_unicode())
    }

    pub fn with_unicode(console: &'c RefCell<Console<'a>>, unicode: bool) -> Self {
        Self { console, unicode }
    }
}

fn turn_header(out: &mut dyn Write, name: &str, score: u32) -> io::Result<()> {
    writeln!(out, "------------{}'s turn------------", name)?;
    writeln!(out, "{}'s score: {}", name, score)
}

/// Writes the text for one event.
pub fn render_event(out: &mut dyn Write, event: &GameEvent, unicode: bool) -> io::Result<()> {
    match event {
        GameEvent::RoundStarted { round, standings } => {
            writeln!(out, "-----------Round {}-----------", round)?;
            for s in standings {
                writeln!(out, "{} is at {}", s.name, s.score)?;
            }
        }
        GameEvent::TurnStarted {
            name,
            score,
            options,
            ..
        } => {
            turn_header(out, name, *score)?;
            for action in options {
                writeln!(out, "{}", format_option(*action))?;
            }
        }
        GameEvent::Rolled {
            name,
            action,
            dice,
            score,
            ..
        } => {
            let verb = match action {
                PlayerAction::RollOne => "Rolling one...",
                _ => "Rolling both...",
            };
            writeln!(out, "{}", verb)?;
            writeln!(out, "{}", format_dice(dice, unicode))?;
            writeln!(out, "{} is now on {}", name, score)?;
        }
        GameEvent::WentBust { name, .. } => writeln!(out, "{} goes bust!", name)?,
        GameEvent::Stayed { name, score, .. } => {
            writeln!(out, "{} has stayed with a score of {}", name, score)?
        }
        GameEvent::Skipped {
            name, score, bust, ..
        } => {
            turn_header(out, name, *score)?;
            if *bust {
                writeln!(out, "{} goes bust!", name)?;
            } else {
                writeln!(out, "{} has stayed with a score of {}", name, score)?;
            }
        }
        GameEvent::GameOver { outcome, .. } => writeln!(out, "{}", outcome)?,
    }
    Ok(())
}

impl GameObserver for ConsoleView<'_, '_> {
    fn on_event(&mut self, event: &GameEvent) -> Result<(), GameError> {
        let mut console = self.console.borrow_mut();
        render_event(console.out(), event, self.unicode).map_err(|e| GameError::Io(e.to_string()))
    }
}
