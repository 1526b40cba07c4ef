//! Card values and the standard deck composition.

use serde::{Deserialize, Serialize};

use crate::board::{Color, Picture};

/// Single cards per color in the standard deck.
pub const SINGLES_PER_COLOR: usize = 6;

/// Double cards per color in the standard deck.
pub const DOUBLES_PER_COLOR: usize = 2;

/// Size of the standard deck: 6 × 6 singles, 2 × 6 doubles, 6 pictures.
pub const STANDARD_DECK_SIZE: usize = (SINGLES_PER_COLOR + DOUBLES_PER_COLOR)
    * Color::PALETTE.len()
    + Picture::ALL.len();

/// A drawn movement instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Advance to the next square of this color.
    Single(Color),
    /// Advance to the second next square of this color.
    Double(Color),
    /// Jump to the square bearing this picture, forward or backward.
    Picture(Picture),
}

impl Card {
    /// Color for color cards, `None` for pictures.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Card::Single(color) | Card::Double(color) => Some(color),
            Card::Picture(_) => None,
        }
    }

    /// How many matching squares a color card counts to. Zero for pictures.
    #[must_use]
    pub fn steps(self) -> usize {
        match self {
            Card::Single(_) => 1,
            Card::Double(_) => 2,
            Card::Picture(_) => 0,
        }
    }

    #[must_use]
    pub fn is_picture(self) -> bool {
        matches!(self, Card::Picture(_))
    }

    /// The standard 54-card multiset, grouped by kind.
    #[must_use]
    pub fn standard_set() -> Vec<Card> {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        for color in Color::PALETTE {
            cards.extend(std::iter::repeat(Card::Single(color)).take(SINGLES_PER_COLOR));
            cards.extend(std::iter::repeat(Card::Double(color)).take(DOUBLES_PER_COLOR));
        }
        cards.extend(Picture::ALL.map(Card::Picture));
        cards
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Single(color) => write!(f, "single {color}"),
            Card::Double(color) => write!(f, "double {color}"),
            Card::Picture(picture) => write!(f, "{picture}"),
        }
    }
}
