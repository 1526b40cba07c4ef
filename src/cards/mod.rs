//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Card`: `Single(color)`, `Double(color)` or `Picture(name)`
//! - `Deck`: draw pile and discard pile over a fixed multiset
//!
//! The standard deck has 54 cards: six singles and two doubles of every
//! palette color, plus one card per picture.

pub mod card;
pub mod deck;

pub use card::{Card, DOUBLES_PER_COLOR, SINGLES_PER_COLOR, STANDARD_DECK_SIZE};
pub use deck::Deck;
