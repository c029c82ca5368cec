//! End-of-game evaluation.
//!
//! A game only ends once every player has stayed or gone bust. The winner is
//! the non-busted player closest to 21; two or more players sharing the best
//! margin is a draw, and a table where everyone went bust has no winner.

use crate::player::Player;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Final result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A single player finished closest to 21
    Winner {
        seat: usize,
        name: String,
        score: u32,
    },
    /// Two or more non-busted players share the best score
    Draw { seats: Vec<usize>, score: u32 },
    /// Every player went bust
    AllBust,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { name, .. } => write!(f, "{} is the winner!", name),
            Outcome::Draw { .. } => f.write_str("The game is a draw! No one wins :("),
            Outcome::AllBust => f.write_str("Everyone's gone bust! No one wins :("),
        }
    }
}

/// Whether a game should keep going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Finished(o) => Some(o),
        }
    }
}

/// Decides whether the game has concluded and, if so, how.
///
/// Busted players are excluded from the margin comparison whatever their
/// score, so they can never win or take part in a draw.
///
/// # Examples
///
/// ```
/// use twentyone_engine::dice::ScriptedDice;
/// use twentyone_engine::engine::execute_turn;
/// use twentyone_engine::outcome::{evaluate, GameStatus, Outcome};
/// use twentyone_engine::player::{Player, PlayerAction};
///
/// let mut dice = ScriptedDice::new(vec![6, 6, 3, 3, 6, 6, 6, 6]);
/// let mut p1 = Player::new("Player 1");
/// let mut p2 = Player::new("Player 2");
/// execute_turn(&mut p1, PlayerAction::RollTwo, &mut dice);
/// execute_turn(&mut p1, PlayerAction::RollTwo, &mut dice);
/// execute_turn(&mut p1, PlayerAction::Stay, &mut dice); // 18
/// execute_turn(&mut p2, PlayerAction::RollTwo, &mut dice);
/// execute_turn(&mut p2, PlayerAction::RollTwo, &mut dice); // 24, bust
///
/// let status = evaluate(&[p1, p2]);
/// assert!(matches!(
///     status,
///     GameStatus::Finished(Outcome::Winner { seat: 0, score: 18, .. })
/// ));
/// ```
pub fn evaluate(players: &[Player]) -> GameStatus {
    let busted = players.iter().filter(|p| p.is_bust()).count();
    let stayed = players
        .iter()
        .filter(|p| !p.is_bust() && p.has_stayed())
        .count();

    if busted + stayed != players.len() {
        return GameStatus::InProgress;
    }

    if busted == players.len() {
        debug!(players = players.len(), "everyone went bust");
        return GameStatus::Finished(Outcome::AllBust);
    }

    let contenders: Vec<(usize, &Player)> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_bust())
        .collect();

    // contenders is non-empty: not everyone is bust
    let best_margin = contenders
        .iter()
        .map(|(_, p)| p.margin())
        .min()
        .unwrap_or(i64::MAX);

    let leaders: Vec<(usize, &Player)> = contenders
        .into_iter()
        .filter(|(_, p)| p.margin() == best_margin)
        .collect();

    let outcome = match leaders.as_slice() {
        [(seat, player)] => Outcome::Winner {
            seat: *seat,
            name: player.name().to_string(),
            score: player.score(),
        },
        _ => Outcome::Draw {
            seats: leaders.iter().map(|(seat, _)| *seat).collect(),
            score: leaders.first().map(|(_, p)| p.score()).unwrap_or_default(),
        },
    };

    debug!(?outcome, "game finished");
    GameStatus::Finished(outcome)
}
