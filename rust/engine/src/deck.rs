use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A depleting source of cards with its own seeded RNG.
///
/// The top of the deck is the end of the backing vector: [`Deck::draw`] pops
/// from there. The deck never refills itself; callers decide when to
/// [`Deck::reset`].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Full deck in canonical order, not yet shuffled.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: ChaCha20Rng) -> Self {
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Deck holding exactly `cards`; the last element is drawn first.
    ///
    /// Partial decks are allowed. A later [`Deck::reset`] restores all 52 cards.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Full deck whose first draws follow `draw_order`.
    ///
    /// The cards not named in `draw_order` sit underneath in canonical order,
    /// so the deck still holds 52 distinct cards as long as `draw_order` has no
    /// repeats.
    pub fn stacked(draw_order: &[Card], seed: u64) -> Self {
        let mut cards: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| !draw_order.contains(c))
            .collect();
        cards.extend(draw_order.iter().rev().copied());
        Self::from_cards(cards, seed)
    }

    /// Fisher-Yates pass over the current cards.
    pub fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Rebuild the full 52-card set and shuffle it.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.shuffle();
    }

    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
