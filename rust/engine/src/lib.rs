//! # twentyone-engine: Twenty One Turn Engine
//!
//! The round-based turn engine for "Twenty One", a dice game where players roll
//! two dice per turn until they stay or go bust over 21. The player closest to
//! 21 once everyone is done wins.
//!
//! The engine performs no I/O. Presentation layers drive it through the
//! [`game::ActionProvider`] and [`events::GameObserver`] seams.
//!
//! ## Core Modules
//!
//! - [`dice`] - Seeded die rolls and scripted dice for tests
//! - [`player`] - Player state and the actions a player can take
//! - [`rules`] - Game constants, offered actions and action validation
//! - [`engine`] - Turn execution (rolling, staying, bust detection)
//! - [`outcome`] - End-of-game evaluation (winner, draw, all bust)
//! - [`game`] - Round orchestration for solo and multiplayer games
//! - [`events`] - Events published while a game runs
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use twentyone_engine::dice::ScriptedDice;
//! use twentyone_engine::engine::execute_turn;
//! use twentyone_engine::player::{Player, PlayerAction};
//!
//! let mut dice = ScriptedDice::new(vec![6, 5]);
//! let mut player = Player::new("Player 1");
//!
//! let report = execute_turn(&mut player, PlayerAction::RollTwo, &mut dice);
//! assert_eq!(report.dice, vec![6, 5]);
//! assert_eq!(player.score(), 11);
//! assert!(!player.is_bust());
//! ```
//!
//! ## End-Of-Game Evaluation
//!
//! ```rust
//! use twentyone_engine::outcome::{evaluate, GameStatus};
//! use twentyone_engine::player::Player;
//!
//! let players = vec![Player::new("Player 1"), Player::new("Player 2")];
//! // Nobody has stayed or gone bust yet
//! assert_eq!(evaluate(&players), GameStatus::InProgress);
//! ```

pub mod dice;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod outcome;
pub mod player;
pub mod rules;
