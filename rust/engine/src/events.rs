use crate::errors::GameError;
use crate::outcome::Outcome;
use crate::player::{Player, PlayerAction};
use serde::Serialize;

/// A player's name and score at the start of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub name: String,
    pub score: u32,
}

impl From<&Player> for Standing {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name().to_string(),
            score: p.score(),
        }
    }
}

/// Progress published by the game loop, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new round begins
    RoundStarted {
        round: u32,
        standings: Vec<Standing>,
    },
    /// A player still in the game is about to choose
    TurnStarted {
        seat: usize,
        name: String,
        score: u32,
        options: Vec<PlayerAction>,
    },
    /// A player rolled one or two dice
    Rolled {
        seat: usize,
        name: String,
        action: PlayerAction,
        dice: Vec<u8>,
        score: u32,
    },
    /// The last roll took a player over 21
    WentBust {
        seat: usize,
        name: String,
        score: u32,
    },
    /// A player chose to stay
    Stayed {
        seat: usize,
        name: String,
        score: u32,
    },
    /// A finished player sat the round out
    Skipped {
        seat: usize,
        name: String,
        score: u32,
        bust: bool,
    },
    /// The game concluded
    GameOver { rounds: u32, outcome: Outcome },
}

/// Receives every event the game loop publishes.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent) -> Result<(), GameError>;
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) -> Result<(), GameError> {
        Ok(())
    }
}

/// Observer that keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct GameLog {
    events: Vec<GameEvent>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of rounds that were started.
    pub fn rounds_started(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundStarted { .. }))
            .count()
    }

    /// Events concerning a single seat.
    pub fn for_seat(&self, seat: usize) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|e| match e {
                GameEvent::TurnStarted { seat: s, .. }
                | GameEvent::Rolled { seat: s, .. }
                | GameEvent::WentBust { seat: s, .. }
                | GameEvent::Stayed { seat: s, .. }
                | GameEvent::Skipped { seat: s, .. } => *s == seat,
                GameEvent::RoundStarted { .. } | GameEvent::GameOver { .. } => false,
            })
            .collect()
    }
}

impl GameObserver for GameLog {
    fn on_event(&mut self, event: &GameEvent) -> Result<(), GameError> {
        self.events.push(event.clone());
        Ok(())
    }
}
