//! # twentyone-ai: Scripted Opponents for Twenty One
//!
//! Provides the computer-controlled opponent used in solo games. Opponents
//! implement the engine's [`ActionProvider`] trait, so the game loop treats
//! them exactly like an interactive player.
//!
//! ## Core Components
//!
//! - [`threshold`] - The score-threshold policy played by the CPU seat
//! - [`create_ai`] - Factory for building opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use twentyone_ai::create_ai;
//! use twentyone_engine::game::ActionProvider;
//! use twentyone_engine::player::{Player, PlayerAction};
//!
//! let mut ai = create_ai("threshold", Duration::ZERO).unwrap();
//! let cpu = Player::new("CPU Player");
//! let action = ai
//!     .choose_action(&cpu, &[PlayerAction::RollTwo, PlayerAction::Stay])
//!     .unwrap();
//! assert_eq!(action, PlayerAction::RollTwo);
//! ```

use std::time::Duration;
use thiserror::Error;
use twentyone_engine::game::ActionProvider;

pub mod threshold;

/// Opponent kinds [`create_ai`] understands.
pub const AI_KINDS: &[&str] = &["threshold"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown AI type: {0} (available: {available})", available = AI_KINDS.join(", "))]
    UnknownKind(String),
}

/// Factory function to create AI opponents by type string.
///
/// `delay` is a cosmetic pause taken before every decision so a human can
/// follow the opponent's turn; pass [`Duration::ZERO`] to play instantly.
///
/// # Errors
///
/// Returns [`AiError::UnknownKind`] for names not listed in [`AI_KINDS`].
///
/// ```rust
/// use std::time::Duration;
/// use twentyone_ai::{create_ai, AiError};
/// use twentyone_engine::game::ActionProvider;
///
/// let ai = create_ai("threshold", Duration::ZERO).unwrap();
/// assert_eq!(ai.name(), "ThresholdAI");
///
/// assert!(matches!(
///     create_ai("oracle", Duration::ZERO),
///     Err(AiError::UnknownKind(_))
/// ));
/// ```
pub fn create_ai(ai_type: &str, delay: Duration) -> Result<Box<dyn ActionProvider>, AiError> {
    match ai_type {
        "threshold" => Ok(Box::new(threshold::ThresholdAI::with_delay(delay))),
        other => Err(AiError::UnknownKind(other.to_string())),
    }
}

/// Whether `ai_type` names a known opponent.
pub fn is_known_ai(ai_type: &str) -> bool {
    AI_KINDS.contains(&ai_type)
}
