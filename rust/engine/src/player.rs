use serde::{Deserialize, Serialize};
use std::fmt;

/// An action a player can take on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// Roll both dice and add their sum
    RollTwo,
    /// Stop rolling and lock in the current score
    Stay,
    /// Roll a single die (only offered at a score of 14 or more)
    RollOne,
}

impl PlayerAction {
    /// Every action in menu order.
    pub const ALL: [PlayerAction; 3] = [
        PlayerAction::RollTwo,
        PlayerAction::Stay,
        PlayerAction::RollOne,
    ];

    /// Menu number shown next to the action on the console.
    pub fn choice(self) -> u32 {
        match self {
            PlayerAction::RollTwo => 1,
            PlayerAction::Stay => 2,
            PlayerAction::RollOne => 3,
        }
    }

    /// Map a menu number back to an action.
    ///
    /// ```
    /// use twentyone_engine::player::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_choice(3), Some(PlayerAction::RollOne));
    /// assert_eq!(PlayerAction::from_choice(4), None);
    /// ```
    pub fn from_choice(choice: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.choice() == choice)
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerAction::RollTwo => "Roll",
            PlayerAction::Stay => "Stay",
            PlayerAction::RollOne => "Roll One",
        }
    }

    /// Number of dice the action rolls.
    pub fn dice_count(self) -> usize {
        match self {
            PlayerAction::RollTwo => 2,
            PlayerAction::Stay => 0,
            PlayerAction::RollOne => 1,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One participant in a game of Twenty One.
///
/// Fields only change through the turn executor: `score` only grows and every
/// flag, once set, stays set for the rest of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    score: u32,
    stayed: bool,
    at_14: bool,
    bust: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            stayed: false,
            at_14: false,
            bust: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn has_stayed(&self) -> bool {
        self.stayed
    }
    /// Whether the score has ever reached 14.
    pub fn reached_14(&self) -> bool {
        self.at_14
    }
    pub fn is_bust(&self) -> bool {
        self.bust
    }

    /// A finished player has stayed or gone bust and takes no more turns.
    pub fn is_finished(&self) -> bool {
        self.bust || self.stayed
    }

    /// Distance to 21. Negative once the player has gone over.
    pub fn margin(&self) -> i64 {
        i64::from(crate::rules::TARGET_SCORE) - i64::from(self.score)
    }

    pub(crate) fn add_to_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn mark_at_14(&mut self) {
        self.at_14 = true;
    }

    pub(crate) fn mark_stayed(&mut self) {
        self.stayed = true;
    }

    pub(crate) fn mark_bust(&mut self) {
        self.bust = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_clean() {
        let p = Player::new("Player 1");
        assert_eq!(p.name(), "Player 1");
        assert_eq!(p.score(), 0);
        assert!(!p.has_stayed());
        assert!(!p.reached_14());
        assert!(!p.is_bust());
        assert!(!p.is_finished());
        assert_eq!(p.margin(), 21);
    }

    #[test]
    fn finished_when_stayed_or_bust() {
        let mut stayed = Player::new("a");
        stayed.mark_stayed();
        assert!(stayed.is_finished());

        let mut bust = Player::new("b");
        bust.add_to_score(23);
        bust.mark_bust();
        assert!(bust.is_finished());
        assert_eq!(bust.margin(), -2);
    }

    #[test]
    fn choices_round_trip_through_menu_numbers() {
        for action in PlayerAction::ALL {
            assert_eq!(PlayerAction::from_choice(action.choice()), Some(action));
        }
        assert_eq!(PlayerAction::from_choice(0), None);
    }

    #[test]
    fn labels_match_console_menu() {
        assert_eq!(PlayerAction::RollTwo.to_string(), "Roll");
        assert_eq!(PlayerAction::Stay.to_string(), "Stay");
        assert_eq!(PlayerAction::RollOne.to_string(), "Roll One");
    }
}
