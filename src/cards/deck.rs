//! Draw and discard piles over a fixed card multiset.
//!
//! Cards move from the front of the draw pile to the back of the discard
//! pile. When the draw pile runs out, the discard pile is shuffled back in.
//! No card is ever created or dropped after construction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::rng::ShuffleSource;

/// The shared deck.
///
/// ## Example
///
/// ```
/// use candy_race::cards::Deck;
/// use candy_race::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::standard(&mut rng);
///
/// let card = deck.draw(&mut rng).unwrap();
/// assert_eq!(deck.draw_pile_len(), 53);
/// assert_eq!(deck.discard_pile(), &[card]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Build and shuffle the standard 54-card deck.
    #[must_use]
    pub fn standard<S: ShuffleSource>(source: &mut S) -> Self {
        let mut deck = Self::from_cards(Card::standard_set());
        deck.shuffle(source);
        deck
    }

    /// Deck holding exactly `cards`, front first, not shuffled.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            draw_pile: cards.into_iter().collect(),
            discard_pile: Vec::new(),
        }
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle<S: ShuffleSource>(&mut self, source: &mut S) {
        source.shuffle(self.draw_pile.make_contiguous());
    }

    /// Take the front card, discarding it.
    ///
    /// Refills from the discard pile first when the draw pile is empty.
    /// Returns `None` only for a deck that holds no cards at all.
    pub fn draw<S: ShuffleSource>(&mut self, source: &mut S) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.refill(source);
        }

        let card = self.draw_pile.pop_front()?;
        self.discard_pile.push(card);
        Some(card)
    }

    /// Whether the next `draw` will reshuffle the discard pile.
    #[must_use]
    pub fn needs_refill(&self) -> bool {
        self.draw_pile.is_empty() && !self.discard_pile.is_empty()
    }

    fn refill<S: ShuffleSource>(&mut self, source: &mut S) {
        if self.discard_pile.is_empty() {
            return;
        }
        tracing::info!(cards = self.discard_pile.len(), "reshuffling discard pile into draw pile");
        self.draw_pile.extend(self.discard_pile.drain(..));
        self.shuffle(source);
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards in both piles together. Constant for the life of the deck.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Draw pile, front first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile.iter()
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
}
