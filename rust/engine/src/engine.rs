use crate::dice::DieSource;
use crate::player::{Player, PlayerAction};
use crate::rules::{ROLL_ONE_THRESHOLD, TARGET_SCORE};
use serde::Serialize;
use tracing::debug;

/// What happened during a single turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Action that was applied
    pub action: PlayerAction,
    /// Faces drawn, in order (empty when staying)
    pub dice: Vec<u8>,
    /// Score after the turn
    pub score: u32,
    /// Whether this turn took the player over 21
    pub went_bust: bool,
}

/// Applies one action to a player who has not finished.
///
/// The caller is responsible for only offering legal actions (see
/// [`crate::rules::available_actions`]); the executor does not re-validate.
/// Rolling a single die below 14 or acting for a finished player is a
/// contract violation caught by debug assertions.
///
/// # Examples
///
/// ```
/// use twentyone_engine::dice::ScriptedDice;
/// use twentyone_engine::engine::execute_turn;
/// use twentyone_engine::player::{Player, PlayerAction};
///
/// let mut dice = ScriptedDice::new(vec![6, 6, 4, 3, 2, 3]);
/// let mut p = Player::new("Player 1");
/// execute_turn(&mut p, PlayerAction::RollTwo, &mut dice); // 12
/// execute_turn(&mut p, PlayerAction::RollTwo, &mut dice); // 19
/// assert!(p.reached_14());
///
/// let report = execute_turn(&mut p, PlayerAction::RollTwo, &mut dice);
/// assert_eq!(report.dice, vec![2, 3]);
/// assert_eq!(p.score(), 24);
/// assert!(report.went_bust && p.is_bust());
/// ```
pub fn execute_turn(
    player: &mut Player,
    action: PlayerAction,
    dice: &mut dyn DieSource,
) -> TurnReport {
    debug_assert!(
        !player.is_finished(),
        "{} has already finished",
        player.name()
    );
    debug_assert!(
        action != PlayerAction::RollOne || player.score() >= ROLL_ONE_THRESHOLD,
        "single die offered to {} below {}",
        player.name(),
        ROLL_ONE_THRESHOLD
    );

    let rolls = match action {
        PlayerAction::Stay => {
            player.mark_stayed();
            Vec::new()
        }
        PlayerAction::RollTwo | PlayerAction::RollOne => {
            let rolls = dice.roll_dice(action.dice_count());
            player.add_to_score(rolls.iter().map(|&f| u32::from(f)).sum());
            // at_14 is only recorded on a two-dice roll; one die is never
            // offered below 14 so the flag is already set by then
            if action == PlayerAction::RollTwo && player.score() >= ROLL_ONE_THRESHOLD {
                player.mark_at_14();
            }
            rolls
        }
    };

    let went_bust = action != PlayerAction::Stay && player.score() > TARGET_SCORE;
    if went_bust {
        player.mark_bust();
    }

    debug!(
        player = player.name(),
        action = %action,
        dice = ?rolls,
        score = player.score(),
        bust = player.is_bust(),
        "turn executed"
    );

    TurnReport {
        action,
        dice: rolls,
        score: player.score(),
        went_bust,
    }
}
