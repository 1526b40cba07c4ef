//! Squares and their annotations.
//!
//! A square's special role is a tagged `SquareKind`, so a square can never
//! be both start and finish, and lose-turn can only sit on a picture.

use serde::{Deserialize, Serialize};

/// Square and card colors, in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Purple,
    Yellow,
    Blue,
    Orange,
    Green,
}

impl Color {
    /// The fixed palette. Track squares cycle through it in this order.
    pub const PALETTE: [Color; 6] = [
        Color::Red,
        Color::Purple,
        Color::Yellow,
        Color::Blue,
        Color::Orange,
        Color::Green,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Green => "green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named picture squares. Each has exactly one square and one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Picture {
    PeppermintForest,
    GummyHills,
    LollipopWoods,
    GumdropMountains,
    IceCreamSea,
    LicoriceLagoon,
}

impl Picture {
    pub const ALL: [Picture; 6] = [
        Picture::PeppermintForest,
        Picture::GummyHills,
        Picture::LollipopWoods,
        Picture::GumdropMountains,
        Picture::IceCreamSea,
        Picture::LicoriceLagoon,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Picture::PeppermintForest => "Peppermint Forest",
            Picture::GummyHills => "Gummy Hills",
            Picture::LollipopWoods => "Lollipop Woods",
            Picture::GumdropMountains => "Gumdrop Mountains",
            Picture::IceCreamSea => "Ice Cream Sea",
            Picture::LicoriceLagoon => "Licorice Lagoon",
        }
    }
}

impl std::fmt::Display for Picture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a square does beyond carrying a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    /// Index 0. Every pawn starts here.
    Start,
    /// Last index. Reaching it wins.
    Finish,
    /// Ordinary colored square.
    Plain,
    /// Picture square; `lose_turn` makes the lander skip their next turn.
    Picture { picture: Picture, lose_turn: bool },
    /// Landing here with a color card jumps forward to `target`.
    Shortcut { target: usize },
}

/// One position on the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    index: usize,
    color: Option<Color>,
    kind: SquareKind,
}

impl Square {
    pub(crate) fn new(index: usize, color: Option<Color>, kind: SquareKind) -> Self {
        Self { index, color, kind }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Square color. `None` only for the start square.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self.kind, SquareKind::Start)
    }

    #[must_use]
    pub fn is_finish(&self) -> bool {
        matches!(self.kind, SquareKind::Finish)
    }

    #[must_use]
    pub fn picture(&self) -> Option<Picture> {
        match self.kind {
            SquareKind::Picture { picture, .. } => Some(picture),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_lose_turn(&self) -> bool {
        matches!(self.kind, SquareKind::Picture { lose_turn: true, .. })
    }

    /// Target index if this square is a shortcut origin.
    #[must_use]
    pub fn shortcut_target(&self) -> Option<usize> {
        match self.kind {
            SquareKind::Shortcut { target } => Some(target),
            _ => None,
        }
    }
}
