//! Game configuration.
//!
//! `GameConfig` is the serializable value a caller hands to the engine to
//! start a match: seat count, optional names, RNG seed and how many log
//! entries the snapshot carries.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{Player, PlayerId};

/// Fewest players a match supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match supports.
pub const MAX_PLAYERS: usize = 6;

/// Log entries included in a snapshot by default.
pub const DEFAULT_LOG_TAIL: usize = 6;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (`MIN_PLAYERS..=MAX_PLAYERS`).
    pub player_count: usize,

    /// Display names by seat. Missing or blank entries get "Player N".
    #[serde(default)]
    pub player_names: Vec<String>,

    /// Seed for the deck shuffle.
    /// Same seed and names produce the same game.
    pub seed: u64,

    /// Number of trailing log entries exposed by `Game::snapshot`.
    #[serde(default = "default_log_tail")]
    pub log_tail: usize,
}

fn default_log_tail() -> usize {
    DEFAULT_LOG_TAIL
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            player_names: Vec::new(),
            seed: 42,
            log_tail: DEFAULT_LOG_TAIL,
        }
    }
}

impl GameConfig {
    /// Create a config for `player_count` unnamed players.
    ///
    /// The count is checked by `validate`, not here, so a config can be
    /// built from untrusted input and rejected as a whole.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set player names.
    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many log entries the snapshot carries.
    #[must_use]
    pub fn with_log_tail(mut self, log_tail: usize) -> Self {
        self.log_tail = log_tail;
        self
    }

    /// Check the configuration before a match is created.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount {
                count: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.player_names.len() > self.player_count {
            return Err(GameError::NameCountMismatch {
                count: self.player_count,
                names: self.player_names.len(),
            });
        }
        Ok(())
    }

    /// Build the seated players, substituting default names.
    #[must_use]
    pub fn players(&self) -> Vec<Player> {
        PlayerId::all(self.player_count)
            .map(|id| {
                let name = self
                    .player_names
                    .get(id.index())
                    .map(String::as_str)
                    .unwrap_or_default();
                Player::new(id, name)
            })
            .collect()
    }
}
