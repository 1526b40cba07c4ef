//! Deterministic random number generation and injectable shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deck orders
//! - **Injectable**: The deck only sees a `ShuffleSource`, so tests can
//!   substitute a fixed order
//! - **Serializable**: O(1) state capture and restore via `GameRngState`
//!
//! ## Usage
//!
//! ```
//! use candy_race::core::{GameRng, ShuffleSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of permutations for the deck.
///
/// Implementations must leave the slice holding the same elements.
/// `GameRng` produces uniformly random permutations; `Unshuffled`
/// leaves the order untouched for scripted games.
pub trait ShuffleSource {
    /// Permute `cards` in place.
    fn shuffle<T>(&mut self, cards: &mut [T]);
}

/// Deterministic RNG backing the default shuffle source.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameRngState", into = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl ShuffleSource for GameRng {
    fn shuffle<T>(&mut self, cards: &mut [T]) {
        use rand::seq::SliceRandom;
        cards.shuffle(&mut self.inner);
    }
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many shuffles have been performed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Shuffle source that keeps cards in the order they were given.
///
/// Used for scripted decks: the first card passed to the deck is the
/// first card drawn, and a reshuffled discard pile comes back in discard
/// order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unshuffled;

impl ShuffleSource for Unshuffled {
    fn shuffle<T>(&mut self, _cards: &mut [T]) {}
}
