//! The board: a fixed linear track of annotated squares.
//!
//! ## Layout
//!
//! - Index 0 is the start square (no color)
//! - The last index is the finish square, colored with the first palette color
//! - Every other index `i` is colored `PALETTE[(i - 1) % 6]`
//! - Picture squares and the shortcut come from the tables in `layout`
//!
//! The board is generated once per game and never mutated.

pub mod layout;
pub mod square;

use serde::{Deserialize, Serialize};

pub use layout::{BOARD_LENGTH, PICTURE_SQUARES, SHORTCUT};
pub use square::{Color, Picture, Square, SquareKind};

/// Immutable track of squares.
///
/// ## Example
///
/// ```
/// use candy_race::board::{Board, Color};
///
/// let board = Board::generate();
///
/// assert!(board.square(0).unwrap().is_start());
/// assert!(board.square(board.finish_index()).unwrap().is_finish());
/// assert_eq!(board.square(1).unwrap().color(), Some(Color::Red));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Build the standard board.
    #[must_use]
    pub fn generate() -> Self {
        debug_assert_eq!(layout::check(), None, "malformed board layout");

        let finish = BOARD_LENGTH - 1;
        let palette = Color::PALETTE;

        let squares = (0..BOARD_LENGTH)
            .map(|index| {
                if index == 0 {
                    return Square::new(index, None, SquareKind::Start);
                }
                if index == finish {
                    return Square::new(index, Some(palette[0]), SquareKind::Finish);
                }

                let color = Some(palette[(index - 1) % palette.len()]);
                let kind = if let Some((_, picture, lose_turn)) =
                    PICTURE_SQUARES.iter().find(|(i, _, _)| *i == index)
                {
                    SquareKind::Picture {
                        picture: *picture,
                        lose_turn: *lose_turn,
                    }
                } else if index == SHORTCUT.0 {
                    SquareKind::Shortcut { target: SHORTCUT.1 }
                } else {
                    SquareKind::Plain
                };

                Square::new(index, color, kind)
            })
            .collect();

        Self { squares }
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Index of the finish square (the last one).
    #[must_use]
    pub fn finish_index(&self) -> usize {
        self.squares.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_finish(&self, index: usize) -> bool {
        index == self.finish_index()
    }

    #[must_use]
    pub fn square(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Index of the square bearing `picture`, scanning the whole board.
    #[must_use]
    pub fn picture_square(&self, picture: Picture) -> Option<usize> {
        self.squares
            .iter()
            .find(|square| square.picture() == Some(picture))
            .map(Square::index)
    }

    /// Index of the `nth` (1-based) square after `from` with `color`.
    ///
    /// The finish square never matches, whatever its color. Returns `None`
    /// when fewer than `nth` such squares lie ahead.
    #[must_use]
    pub fn nth_color_ahead(&self, from: usize, color: Color, nth: usize) -> Option<usize> {
        let finish = self.finish_index();
        self.squares
            .iter()
            .skip(from + 1)
            .take_while(|square| square.index() < finish)
            .filter(|square| square.color() == Some(color))
            .nth(nth.checked_sub(1)?)
            .map(Square::index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::generate()
    }
}
