use crate::dice::{Dice, DieSource};
use crate::engine::{execute_turn, TurnReport};
use crate::errors::GameError;
use crate::events::{GameEvent, GameObserver, Standing};
use crate::outcome::{evaluate, GameStatus, Outcome};
use crate::player::{Player, PlayerAction};
use crate::rules::{available_actions, validate_action, validate_player_count};
use tracing::{debug, info};

/// Name of the human seat in a solo game.
pub const SOLO_PLAYER_NAME: &str = "Player 1";
/// Name of the scripted opponent in a solo game.
pub const CPU_PLAYER_NAME: &str = "CPU Player";

/// Produces the action a seat takes on its turn.
///
/// Scripted opponents and interactive prompts both implement this, so the game
/// loop never needs to know which kind of player it is asking.
///
/// # Example Implementation
///
/// ```rust
/// use twentyone_engine::errors::GameError;
/// use twentyone_engine::game::ActionProvider;
/// use twentyone_engine::player::{Player, PlayerAction};
///
/// struct AlwaysStay;
///
/// impl ActionProvider for AlwaysStay {
///     fn choose_action(
///         &mut self,
///         _player: &Player,
///         _options: &[PlayerAction],
///     ) -> Result<PlayerAction, GameError> {
///         Ok(PlayerAction::Stay)
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysStay"
///     }
/// }
/// ```
pub trait ActionProvider {
    /// Pick one of `options` for `player`.
    ///
    /// `options` is never empty and always reflects what the player may
    /// legally do right now.
    fn choose_action(
        &mut self,
        player: &Player,
        options: &[PlayerAction],
    ) -> Result<PlayerAction, GameError>;

    /// Identifier for logs.
    fn name(&self) -> &str;
}

/// Table layouts the game can be started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One human against the scripted opponent
    Solo,
    /// Local multiplayer with the given number of human players
    Multiplayer(usize),
}

impl GameMode {
    /// Seat names in turn order.
    ///
    /// ```
    /// use twentyone_engine::game::GameMode;
    ///
    /// assert_eq!(GameMode::Solo.seat_names(), vec!["Player 1", "CPU Player"]);
    /// assert_eq!(GameMode::Multiplayer(3).seat_names()[2], "Player 3");
    /// ```
    pub fn seat_names(&self) -> Vec<String> {
        match self {
            GameMode::Solo => vec![SOLO_PLAYER_NAME.to_string(), CPU_PLAYER_NAME.to_string()],
            GameMode::Multiplayer(n) => (1..=*n).map(|i| format!("Player {}", i)).collect(),
        }
    }
}

/// A single game of Twenty One.
///
/// Owns the players for the lifetime of the game and the dice they roll.
/// Seats act strictly in order; seats that have stayed or gone bust are
/// skipped for the rest of the game.
///
/// # Examples
///
/// ```
/// use twentyone_engine::dice::ScriptedDice;
/// use twentyone_engine::game::{Game, GameMode};
/// use twentyone_engine::outcome::GameStatus;
/// use twentyone_engine::player::PlayerAction;
///
/// let mut game = Game::for_mode(GameMode::Multiplayer(2), ScriptedDice::new(vec![5, 4])).unwrap();
/// game.take_turn(0, PlayerAction::RollTwo).unwrap(); // Player 1 on 9
/// game.take_turn(0, PlayerAction::Stay).unwrap();
/// game.take_turn(1, PlayerAction::Stay).unwrap(); // Player 2 on 0
///
/// assert!(matches!(game.status(), GameStatus::Finished(_)));
/// ```
#[derive(Debug)]
pub struct Game<D: DieSource = Dice> {
    players: Vec<Player>,
    /// Rounds completed so far
    round: u32,
    dice: D,
}

impl<D: DieSource> Game<D> {
    pub fn new(names: Vec<String>, dice: D) -> Result<Self, GameError> {
        validate_player_count(names.len())?;
        Ok(Self {
            players: names.into_iter().map(Player::new).collect(),
            round: 0,
            dice,
        })
    }

    pub fn for_mode(mode: GameMode, dice: D) -> Result<Self, GameError> {
        Self::new(mode.seat_names(), dice)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    pub fn status(&self) -> GameStatus {
        evaluate(&self.players)
    }

    /// Applies a validated action for one seat outside of a full round.
    pub fn take_turn(&mut self, seat: usize, action: PlayerAction) -> Result<TurnReport, GameError> {
        let player = self
            .players
            .get_mut(seat)
            .ok_or(GameError::UnknownSeat { seat })?;
        validate_action(player, action)?;
        Ok(execute_turn(player, action, &mut self.dice))
    }

    /// Plays one round: every seat still in the game takes exactly one action.
    ///
    /// `providers` must hold one provider per seat, in seat order.
    pub fn play_round(
        &mut self,
        providers: &mut [Box<dyn ActionProvider + '_>],
        observer: &mut dyn GameObserver,
    ) -> Result<(), GameError> {
        self.check_providers(providers.len())?;

        let round = self.round + 1;
        debug!(round, "round started");
        observer.on_event(&GameEvent::RoundStarted {
            round,
            standings: self.players.iter().map(Standing::from).collect(),
        })?;

        for (seat, provider) in providers.iter_mut().enumerate() {
            let player = &self.players[seat];
            if player.is_finished() {
                observer.on_event(&GameEvent::Skipped {
                    seat,
                    name: player.name().to_string(),
                    score: player.score(),
                    bust: player.is_bust(),
                })?;
                continue;
            }

            let options = available_actions(player);
            observer.on_event(&GameEvent::TurnStarted {
                seat,
                name: player.name().to_string(),
                score: player.score(),
                options: options.clone(),
            })?;

            let action = provider.choose_action(player, &options)?;
            debug!(seat, provider = provider.name(), action = %action, "action chosen");

            let report = self.take_turn(seat, action)?;
            self.publish_turn(seat, &report, observer)?;
        }

        self.round = round;
        Ok(())
    }

    /// Plays rounds until every seat has stayed or gone bust.
    pub fn run(
        &mut self,
        providers: &mut [Box<dyn ActionProvider + '_>],
        observer: &mut dyn GameObserver,
    ) -> Result<Outcome, GameError> {
        self.check_providers(providers.len())?;
        loop {
            if let GameStatus::Finished(outcome) = self.status() {
                info!(rounds = self.round, %outcome, "game over");
                observer.on_event(&GameEvent::GameOver {
                    rounds: self.round,
                    outcome: outcome.clone(),
                })?;
                return Ok(outcome);
            }
            self.play_round(providers, observer)?;
        }
    }

    fn publish_turn(
        &self,
        seat: usize,
        report: &TurnReport,
        observer: &mut dyn GameObserver,
    ) -> Result<(), GameError> {
        let name = self.players[seat].name().to_string();
        match report.action {
            PlayerAction::Stay => observer.on_event(&GameEvent::Stayed {
                seat,
                name,
                score: report.score,
            }),
            PlayerAction::RollTwo | PlayerAction::RollOne => {
                observer.on_event(&GameEvent::Rolled {
                    seat,
                    name: name.clone(),
                    action: report.action,
                    dice: report.dice.clone(),
                    score: report.score,
                })?;
                if report.went_bust {
                    observer.on_event(&GameEvent::WentBust {
                        seat,
                        name,
                        score: report.score,
                    })?;
                }
                Ok(())
            }
        }
    }

    fn check_providers(&self, actual: usize) -> Result<(), GameError> {
        if actual != self.players.len() {
            return Err(GameError::ProviderCountMismatch {
                expected: self.players.len(),
                actual,
            });
        }
        Ok(())
    }
}
