use crate::errors::GameError;
use crate::player::{Player, PlayerAction};

/// Score every player aims for; anything above it is bust.
pub const TARGET_SCORE: u32 = 21;
/// Score at which rolling a single die becomes available.
pub const ROLL_ONE_THRESHOLD: u32 = 14;
/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;
/// Most players a local multiplayer game can seat.
pub const MAX_PLAYERS: usize = 15;

/// Actions offered to a player on their turn, in menu order.
///
/// Finished players are offered nothing. Rolling a single die is gated on the
/// live score, which agrees with the player's `at_14` history because scores
/// never decrease.
///
/// ```
/// use twentyone_engine::player::{Player, PlayerAction};
/// use twentyone_engine::rules::available_actions;
///
/// let p = Player::new("Player 1");
/// assert_eq!(
///     available_actions(&p),
///     vec![PlayerAction::RollTwo, PlayerAction::Stay]
/// );
/// ```
pub fn available_actions(player: &Player) -> Vec<PlayerAction> {
    if player.is_finished() {
        return Vec::new();
    }
    let mut actions = vec![PlayerAction::RollTwo, PlayerAction::Stay];
    if player.score() >= ROLL_ONE_THRESHOLD {
        actions.push(PlayerAction::RollOne);
    }
    actions
}

/// Checks that `action` is one the player may take right now.
///
/// # Errors
///
/// - [`GameError::PlayerFinished`] - the player already stayed or went bust
/// - [`GameError::ActionNotAvailable`] - single die requested below 14
///
/// ```
/// use twentyone_engine::errors::GameError;
/// use twentyone_engine::player::{Player, PlayerAction};
/// use twentyone_engine::rules::validate_action;
///
/// let p = Player::new("Player 1");
/// assert!(validate_action(&p, PlayerAction::Stay).is_ok());
/// assert!(matches!(
///     validate_action(&p, PlayerAction::RollOne),
///     Err(GameError::ActionNotAvailable { .. })
/// ));
/// ```
pub fn validate_action(player: &Player, action: PlayerAction) -> Result<PlayerAction, GameError> {
    if player.is_finished() {
        return Err(GameError::PlayerFinished {
            name: player.name().to_string(),
        });
    }
    if action == PlayerAction::RollOne && player.score() < ROLL_ONE_THRESHOLD {
        return Err(GameError::ActionNotAvailable {
            name: player.name().to_string(),
            action,
            score: player.score(),
        });
    }
    Ok(action)
}

/// Checks a seat count against the table limits.
pub fn validate_player_count(count: usize) -> Result<usize, GameError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(count)
    } else {
        Err(GameError::InvalidPlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}
