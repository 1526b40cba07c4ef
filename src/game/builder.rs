//! Game construction.

use super::state::Game;
use crate::board::Board;
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameError, GameRng, ShuffleSource};

/// Builder for creating a `Game`.
///
/// ```
/// use candy_race::game::{GameBuilder, GameStatus};
///
/// let game = GameBuilder::new()
///     .player_count(3)
///     .player_names(["Ann", "Bo"])
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.status(), GameStatus::InProgress);
/// assert_eq!(game.players()[2].name(), "Player 3");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config, deck: None }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn player_names<N: Into<String>>(mut self, names: impl IntoIterator<Item = N>) -> Self {
        self.config = self.config.with_names(names);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn log_tail(mut self, log_tail: usize) -> Self {
        self.config.log_tail = log_tail;
        self
    }

    /// Replace the standard deck with `cards`.
    ///
    /// The cards still go through the shuffle source, so pair this with
    /// `Unshuffled` to draw them in the given order.
    pub fn deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = Some(cards.into_iter().collect());
        self
    }

    /// Build with the seeded `GameRng` as shuffle source.
    pub fn build(self) -> Result<Game<GameRng>, GameError> {
        let rng = GameRng::new(self.config.seed);
        self.build_with_source(rng)
    }

    /// Build with a caller-supplied shuffle source.
    pub fn build_with_source<S: ShuffleSource>(self, mut source: S) -> Result<Game<S>, GameError> {
        self.config.validate()?;

        let deck = match self.deck {
            Some(cards) if cards.is_empty() => return Err(GameError::EmptyDeck),
            Some(cards) => {
                let mut deck = Deck::from_cards(cards);
                deck.shuffle(&mut source);
                deck
            }
            None => Deck::standard(&mut source),
        };

        Ok(Game::start(
            Board::generate(),
            deck,
            source,
            self.config.players(),
            self.config.log_tail,
        ))
    }
}

impl Game<GameRng> {
    /// Create a standard game for `player_count` players.
    ///
    /// Blank or missing names become "Player N".
    pub fn new_game<N: Into<String>>(
        player_count: usize,
        names: impl IntoIterator<Item = N>,
        seed: u64,
    ) -> Result<Self, GameError> {
        GameBuilder::new()
            .player_count(player_count)
            .player_names(names)
            .seed(seed)
            .build()
    }

    /// Create a standard game from a configuration.
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder::from_config(config).build()
    }
}
