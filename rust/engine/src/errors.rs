use crate::player::PlayerAction;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid player count: {count} (allowed {min}-{max})")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("Expected {expected} action providers, got {actual}")]
    ProviderCountMismatch { expected: usize, actual: usize },
    #[error("No player sits at seat {seat}")]
    UnknownSeat { seat: usize },
    #[error("{name} has already finished")]
    PlayerFinished { name: String },
    #[error("{action} is not available to {name} at a score of {score}")]
    ActionNotAvailable {
        name: String,
        action: PlayerAction,
        score: u32,
    },
    #[error("Input closed while waiting for {name}")]
    InputClosed { name: String },
    #[error("Console I/O failed: {0}")]
    Io(String),
}
