use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Highest total a hand may reach without busting.
pub const BLACKJACK: u8 = 21;

/// Cards held by one party during a round.
///
/// Aces enter the total as 11 and are demoted to 1, one at a time, while the
/// total is over 21. The resulting value is the best total not over 21 when
/// one exists, otherwise the smallest total possible.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(8),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        self.totals().0
    }

    /// True while at least one Ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.totals().1 > 0
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// A natural: exactly two cards totalling 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    // (total, aces still counted as 11)
    fn totals(&self) -> (u8, u8) {
        let mut total: u16 = 0;
        let mut soft_aces = 0u8;
        for card in &self.cards {
            total += u16::from(card.blackjack_value());
            if card.is_ace() {
                soft_aces += 1;
            }
        }
        while total > u16::from(BLACKJACK) && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        (total.min(u16::from(u8::MAX)) as u8, soft_aces)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
