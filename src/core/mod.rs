//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the deck and the
//! game loop.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_LOG_TAIL, MAX_PLAYERS, MIN_PLAYERS};
pub use error::GameError;
pub use player::{Pawn, Player, PlayerId};
pub use rng::{GameRng, GameRngState, ShuffleSource, Unshuffled};
