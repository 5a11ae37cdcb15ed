//! Card, hand and result formatters for terminal display.
//!
//! Suits render as Unicode symbols (♥ ♦ ♣ ♠) where the terminal supports
//! them and fall back to `h d c s` elsewhere.
//!
//! ```rust
//! use bjlite_engine::cards::{Card, Rank, Suit};
//! use bjlite_cli::formatters::format_card;
//!
//! let ten = Card::new(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten) == "10♠" || format_card(&ten) == "10s");
//! ```

use bjlite_engine::cards::{Card, Rank, Suit};
use bjlite_engine::hand::Hand;
use bjlite_engine::rules::Outcome;
use bjlite_engine::stats::StatisticsSnapshot;

/// On Windows only modern terminals (Windows Terminal, VS Code, anything
/// setting TERM_PROGRAM) are trusted with Unicode; Unix-like systems always are.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_rank(rank: &Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards in the order received followed by the hand value, e.g. `K♠ 7♥ (Value: 17)`.
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    format!("{} (Value: {})", cards.join(" "), hand.value())
}

/// One-line verdict shown to the player once a round is resolved.
pub fn format_outcome(outcome: Outcome, player_value: u8, dealer_value: u8) -> String {
    match outcome {
        Outcome::PlayerBust => format!("BUST! You lose with {}.", player_value),
        Outcome::DealerBust => format!("Dealer busts with {}. You win!", dealer_value),
        Outcome::PlayerBlackjack => "BLACKJACK! You win!".to_string(),
        Outcome::DealerBlackjack => "Dealer has blackjack. Dealer wins.".to_string(),
        Outcome::PlayerHigher => format!("You win! ({} vs {})", player_value, dealer_value),
        Outcome::DealerHigher => format!("Dealer wins ({} vs {})", dealer_value, player_value),
        Outcome::Push => format!("Push - tie at {}", player_value),
    }
}

pub fn format_record(stats: &StatisticsSnapshot) -> String {
    format!(
        "Record: {}W - {}L - {}P",
        stats.wins, stats.losses, stats.pushes
    )
}

pub fn format_win_rate(stats: &StatisticsSnapshot) -> String {
    format!("Win Rate: {:.1}%", stats.win_rate)
}
