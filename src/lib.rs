//! # candy-race
//!
//! A deterministic engine for a race-to-the-end board game.
//!
//! Players take turns drawing cards from a shared deck. Color cards move a
//! pawn forward to the next (or second next) square of that color, picture
//! cards jump straight to a named square. A shortcut and a lose-turn square
//! spice up the track, and the first pawn to reach the finish wins.
//!
//! ## Design Principles
//!
//! 1. **Freestanding matches**: A `Game` owns all of its state and is
//!    serializable. There is no global session; callers key and persist
//!    matches themselves.
//!
//! 2. **Injected randomness**: The deck only shuffles through a
//!    `ShuffleSource`. The default is a seeded ChaCha8 `GameRng`; tests use
//!    `Unshuffled` to script the draw order.
//!
//! 3. **Typed board**: A square's role is a tagged `SquareKind`, not a bag
//!    of flags.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `board`: Board generation and square annotations
//! - `cards`: Cards and the draw/discard deck
//! - `game`: Turn play, move resolution, event log, snapshots
//!
//! ## Example
//!
//! ```
//! use candy_race::Game;
//!
//! let mut game = Game::new_game(2, ["Ann", "Bo"], 42).unwrap();
//! while !game.is_finished() {
//!     game.play_turn().unwrap();
//! }
//! assert!(game.winner().is_some());
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, Pawn, Player, PlayerId, ShuffleSource, Unshuffled,
};

pub use crate::board::{Board, Color, Picture, Square, SquareKind};

pub use crate::cards::{Card, Deck};

pub use crate::game::{
    Game, GameBuilder, GameEvent, GameSnapshot, GameStatus, LogEntry, MoveOutcome, MoveStep,
};
