//! Engine error type.
//!
//! Errors only come from caller input: a rejected configuration or an
//! operation on a finished game. Move resolution itself never fails.

use thiserror::Error;

/// Errors returned by game construction and turn play.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count {count} is outside the supported range {min}-{max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("{names} player names given for {count} players")]
    NameCountMismatch { count: usize, names: usize },

    #[error("the deck holds no cards")]
    EmptyDeck,

    #[error("the game is already finished")]
    GameFinished,
}
