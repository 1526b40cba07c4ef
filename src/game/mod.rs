//! The game engine: match state, turn play, event log and snapshots.
//!
//! ## Key Types
//!
//! - `Game`: owns board, deck, players and the log; plays turns
//! - `GameBuilder`: validated construction, standard or scripted deck
//! - `GameEvent` / `LogEntry`: the append-only log
//! - `GameSnapshot`: borrowed read-only view for rendering

mod builder;
pub mod log;
mod snapshot;
mod state;

pub use builder::GameBuilder;
pub use log::{GameEvent, LogEntry};
pub use snapshot::GameSnapshot;
pub use state::{Game, GameStatus, MoveOutcome, MoveStep};
