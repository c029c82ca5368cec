//! Score-threshold opponent.
//!
//! The CPU seat's whole strategy is a fixed mapping from its own score:
//! roll both dice below 14, roll a single die from 14 up to 16, and stay from
//! 17. It never looks at the other players.

use std::time::Duration;
use tracing::debug;
use twentyone_engine::errors::GameError;
use twentyone_engine::game::ActionProvider;
use twentyone_engine::player::{Player, PlayerAction};
use twentyone_engine::rules::ROLL_ONE_THRESHOLD;

/// Score from which the opponent stays.
pub const STAY_THRESHOLD: u32 = 17;

/// Pause before each decision when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Picks the opponent's action for a given score.
///
/// ```rust
/// use twentyone_ai::threshold::choose_action;
/// use twentyone_engine::player::PlayerAction;
///
/// assert_eq!(choose_action(13), PlayerAction::RollTwo);
/// assert_eq!(choose_action(14), PlayerAction::RollOne);
/// assert_eq!(choose_action(16), PlayerAction::RollOne);
/// assert_eq!(choose_action(17), PlayerAction::Stay);
/// ```
pub fn choose_action(score: u32) -> PlayerAction {
    if score < ROLL_ONE_THRESHOLD {
        PlayerAction::RollTwo
    } else if score < STAY_THRESHOLD {
        PlayerAction::RollOne
    } else {
        PlayerAction::Stay
    }
}

/// Opponent that plays [`choose_action`] after a short pause.
#[derive(Debug, Clone)]
pub struct ThresholdAI {
    delay: Duration,
}

impl ThresholdAI {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for ThresholdAI {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionProvider for ThresholdAI {
    fn choose_action(
        &mut self,
        player: &Player,
        options: &[PlayerAction],
    ) -> Result<PlayerAction, GameError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let action = choose_action(player.score());
        debug_assert!(
            options.contains(&action),
            "{} not offered at score {}",
            action,
            player.score()
        );
        debug!(player = player.name(), score = player.score(), action = %action, "ai decision");
        Ok(action)
    }

    fn name(&self) -> &str {
        "ThresholdAI"
    }
}
