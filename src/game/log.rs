//! Append-only game log.
//!
//! Every state change the engine makes is recorded as a typed `GameEvent`
//! together with the turn it happened on and a rendered message for
//! display.

use serde::{Deserialize, Serialize};

use crate::board::Picture;
use crate::cards::Card;
use crate::core::{Player, PlayerId};

/// Something that happened during the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted { players: usize },
    CardDrawn { player: PlayerId, card: Card },
    Moved { player: PlayerId, from: usize, to: usize },
    PictureJump { player: PlayerId, picture: Picture, from: usize, to: usize },
    Shortcut { player: PlayerId, from: usize, to: usize },
    LoseTurn { player: PlayerId, square: usize },
    /// The active player started a turn with the skip flag set.
    TurnSkipped { player: PlayerId },
    /// Turn advancement passed over a flagged player.
    SkipConsumed { player: PlayerId },
    DeckReshuffled { cards: usize },
    Won { player: PlayerId },
}

impl GameEvent {
    /// Player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            GameEvent::CardDrawn { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::PictureJump { player, .. }
            | GameEvent::Shortcut { player, .. }
            | GameEvent::LoseTurn { player, .. }
            | GameEvent::TurnSkipped { player }
            | GameEvent::SkipConsumed { player }
            | GameEvent::Won { player } => Some(player),
            GameEvent::GameStarted { .. } | GameEvent::DeckReshuffled { .. } => None,
        }
    }

    /// Render a human-readable message, naming players from `players`.
    #[must_use]
    pub fn describe(&self, players: &[Player]) -> String {
        let name = |id: PlayerId| {
            players
                .get(id.index())
                .map_or_else(|| id.to_string(), |p| p.name().to_string())
        };

        match *self {
            GameEvent::GameStarted { players: count } => format!("New game with {count} players"),
            GameEvent::CardDrawn { player, card } => format!("{} drew {card}", name(player)),
            GameEvent::Moved { player, from, to } => {
                format!("{} moved from square {from} to square {to}", name(player))
            }
            GameEvent::PictureJump { player, picture, from, to } => {
                format!("{} jumped from square {from} to {picture} (square {to})", name(player))
            }
            GameEvent::Shortcut { player, from, to } => {
                format!("{} took the shortcut from square {from} to square {to}", name(player))
            }
            GameEvent::LoseTurn { player, square } => {
                format!("{} is stuck on square {square} and loses a turn", name(player))
            }
            GameEvent::TurnSkipped { player } | GameEvent::SkipConsumed { player } => {
                format!("{} skips this turn", name(player))
            }
            GameEvent::DeckReshuffled { cards } => {
                format!("Reshuffled {cards} discarded cards into the deck")
            }
            GameEvent::Won { player } => format!("{} wins!", name(player)),
        }
    }
}

/// One log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn counter when the event happened (0 before the first turn).
    pub turn: u32,
    pub event: GameEvent,
    pub message: String,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
