//! Player identification and the per-player record.
//!
//! ## PlayerId
//!
//! Type-safe seat index. The first player is `PlayerId(0)`.
//!
//! ## Player
//!
//! Mutable record the game updates during move resolution and turn
//! advancement: name, pawn, position, skip flag.

use serde::{Deserialize, Serialize};

/// Player identifier (0-based seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use candy_race::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Pawn marker shown on the board. One distinct pawn per seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pawn {
    Gingerbread,
    Gumdrop,
    Peppermint,
    Lollipop,
    Caramel,
    Licorice,
}

impl Pawn {
    /// All pawns, in seat order.
    pub const ALL: [Pawn; 6] = [
        Pawn::Gingerbread,
        Pawn::Gumdrop,
        Pawn::Peppermint,
        Pawn::Lollipop,
        Pawn::Caramel,
        Pawn::Licorice,
    ];

    /// Pawn for a seat. Seats past the pawn count wrap around.
    #[must_use]
    pub fn for_seat(player: PlayerId) -> Self {
        Self::ALL[player.index() % Self::ALL.len()]
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pawn::Gingerbread => "gingerbread",
            Pawn::Gumdrop => "gumdrop",
            Pawn::Peppermint => "peppermint",
            Pawn::Lollipop => "lollipop",
            Pawn::Caramel => "caramel",
            Pawn::Licorice => "licorice",
        }
    }
}

impl std::fmt::Display for Pawn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A participant in the race.
///
/// Fields are only mutated by `Game`; callers read them through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) pawn: Pawn,
    pub(crate) position: usize,
    pub(crate) skip_next_turn: bool,
}

impl Player {
    /// Create a player on the start square.
    ///
    /// A blank name is replaced with the seat's default label.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            Self::default_name(id)
        } else {
            name.trim().to_string()
        };

        Self {
            id,
            name,
            pawn: Pawn::for_seat(id),
            position: 0,
            skip_next_turn: false,
        }
    }

    /// Default label for a seat: "Player N", 1-based.
    #[must_use]
    pub fn default_name(id: PlayerId) -> String {
        id.to_string()
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn pawn(&self) -> Pawn {
        self.pawn
    }

    /// Current board index.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether this player's next turn will be passed over.
    #[must_use]
    pub fn skip_next_turn(&self) -> bool {
        self.skip_next_turn
    }
}
