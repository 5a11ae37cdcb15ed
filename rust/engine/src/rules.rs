use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::hand::Hand;

/// Dealer draws while below this total and stands at or above it, soft or hard.
pub const DEALER_STAND_ON: u8 = 17;

/// A round never starts with fewer cards than this left in the deck.
pub const RESHUFFLE_THRESHOLD: usize = 14;

/// Point values for each rank under one game variant.
///
/// Rank identity is shared across variants; only the table changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueTable {
    // indexed by rank ordinal - 2
    points: [u8; 13],
}

/// Blackjack scoring: pips at face value, faces 10, Ace 11 before adjustment.
pub const BLACKJACK_VALUES: ValueTable = ValueTable {
    points: [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11],
};

impl ValueTable {
    pub const fn new(points: [u8; 13]) -> Self {
        Self { points }
    }

    pub fn points(&self, rank: Rank) -> u8 {
        self.points[rank as usize - 2]
    }
}

/// Which side a resolved round went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Dealer,
    Push,
}

/// The rule that settled a round. Exactly one fires per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    /// Player went over 21; the dealer wins whatever it holds.
    #[serde(rename = "player_dealer_bust")]
    PlayerBust,
    /// Dealer went over 21 with the player still standing.
    #[serde(rename = "dealer_bust_player")]
    DealerBust,
    #[serde(rename = "player_blackjack")]
    PlayerBlackjack,
    #[serde(rename = "dealer_blackjack")]
    DealerBlackjack,
    #[serde(rename = "player_higher")]
    PlayerHigher,
    #[serde(rename = "dealer_higher")]
    DealerHigher,
    #[serde(rename = "push")]
    Push,
}

impl Outcome {
    pub const ALL: [Outcome; 7] = [
        Outcome::PlayerBust,
        Outcome::DealerBust,
        Outcome::PlayerBlackjack,
        Outcome::DealerBlackjack,
        Outcome::PlayerHigher,
        Outcome::DealerHigher,
        Outcome::Push,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::PlayerBust => "player_dealer_bust",
            Outcome::DealerBust => "dealer_bust_player",
            Outcome::PlayerBlackjack => "player_blackjack",
            Outcome::DealerBlackjack => "dealer_blackjack",
            Outcome::PlayerHigher => "player_higher",
            Outcome::DealerHigher => "dealer_higher",
            Outcome::Push => "push",
        }
    }

    pub fn winner(&self) -> Winner {
        match self {
            Outcome::DealerBust | Outcome::PlayerBlackjack | Outcome::PlayerHigher => {
                Winner::Player
            }
            Outcome::PlayerBust | Outcome::DealerBlackjack | Outcome::DealerHigher => {
                Winner::Dealer
            }
            Outcome::Push => Winner::Push,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Rule = (fn(&Hand, &Hand) -> bool, Outcome);

fn player_bust(player: &Hand, _: &Hand) -> bool {
    player.is_bust()
}

fn dealer_bust(_: &Hand, dealer: &Hand) -> bool {
    dealer.is_bust()
}

fn player_natural(player: &Hand, dealer: &Hand) -> bool {
    player.is_blackjack() && !dealer.is_blackjack()
}

fn dealer_natural(player: &Hand, dealer: &Hand) -> bool {
    dealer.is_blackjack() && !player.is_blackjack()
}

// Evaluated top to bottom; the first matching predicate decides the round.
const RESOLUTION_ORDER: [Rule; 4] = [
    (player_bust, Outcome::PlayerBust),
    (dealer_bust, Outcome::DealerBust),
    (player_natural, Outcome::PlayerBlackjack),
    (dealer_natural, Outcome::DealerBlackjack),
];

/// Settles a round from the final player and dealer hands.
///
/// Busts are checked before naturals, and naturals before the numeric
/// comparison. A three-card 21 therefore loses to a dealer blackjack.
///
/// # Examples
///
/// ```
/// use bjlite_engine::cards::{Card, Rank, Suit};
/// use bjlite_engine::hand::Hand;
/// use bjlite_engine::rules::{resolve, Outcome};
///
/// let player: Hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Hearts)]
///     .into_iter()
///     .collect();
/// let dealer: Hand = [Card::new(Rank::Ten, Suit::Clubs), Card::new(Rank::Nine, Suit::Clubs)]
///     .into_iter()
///     .collect();
/// assert_eq!(resolve(&player, &dealer), Outcome::PlayerBlackjack);
/// ```
pub fn resolve(player: &Hand, dealer: &Hand) -> Outcome {
    if let Some((_, outcome)) = RESOLUTION_ORDER
        .iter()
        .find(|(applies, _)| applies(player, dealer))
    {
        return *outcome;
    }
    match player.value().cmp(&dealer.value()) {
        std::cmp::Ordering::Greater => Outcome::PlayerHigher,
        std::cmp::Ordering::Less => Outcome::DealerHigher,
        std::cmp::Ordering::Equal => Outcome::Push,
    }
}

/// Dealer policy: keep drawing while this returns true.
pub fn dealer_must_draw(dealer: &Hand) -> bool {
    dealer.value() < DEALER_STAND_ON
}
