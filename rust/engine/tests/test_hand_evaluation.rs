use bjlite_engine::cards::{Card, Rank as R, Suit as S};
use bjlite_engine::deck::Deck;
use bjlite_engine::hand::Hand;

fn hand(ranks: &[R]) -> Hand {
    ranks.iter().map(|&r| Card::new(r, S::Clubs)).collect()
}

// Best total over every way of counting some Aces as 1.
fn brute_force_value(cards: &[Card]) -> u8 {
    let base: u32 = cards.iter().map(|c| u32::from(c.blackjack_value())).sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;
    let totals: Vec<u32> = (0..=aces).map(|demoted| base - 10 * demoted).collect();
    totals
        .iter()
        .copied()
        .filter(|&t| t <= 21)
        .max()
        .unwrap_or_else(|| totals.iter().copied().min().unwrap()) as u8
}

#[test]
fn hands_without_aces_sum_point_values() {
    let h = hand(&[R::Two, R::Seven, R::Jack]);
    assert_eq!(h.value(), 19);
    let h = hand(&[R::King, R::Queen, R::Five]);
    assert_eq!(h.value(), 25);
    assert!(h.is_bust());
}

#[test]
fn value_matches_brute_force_on_random_hands() {
    for seed in 0..400u64 {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let size = 2 + (seed % 6) as usize;
        let cards: Vec<Card> = (0..size).map(|_| deck.draw().unwrap()).collect();
        let h: Hand = cards.iter().copied().collect();
        assert_eq!(h.value(), brute_force_value(&cards), "hand {:?}", cards);
    }
}

#[test]
fn value_matches_brute_force_on_ace_heavy_hands() {
    let cases: &[&[R]] = &[
        &[R::Ace],
        &[R::Ace, R::Ace],
        &[R::Ace, R::Ace, R::Ace],
        &[R::Ace, R::Ace, R::Ace, R::Ace, R::Seven],
        &[R::Ace, R::Ace, R::Ace, R::Ace, R::King, R::Nine],
        &[R::Ace, R::Five, R::Five],
        &[R::Ace, R::King, R::Queen],
    ];
    for ranks in cases {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, S::Hearts)).collect();
        let h: Hand = cards.iter().copied().collect();
        assert_eq!(h.value(), brute_force_value(&cards), "{:?}", ranks);
    }
}

#[test]
fn blackjack_requires_exactly_two_cards() {
    assert!(hand(&[R::Ace, R::King]).is_blackjack());
    assert!(hand(&[R::Ten, R::Ace]).is_blackjack());
    assert!(!hand(&[R::Ace, R::Ace, R::Nine]).is_blackjack());
    assert!(!hand(&[R::Seven, R::Seven, R::Seven]).is_blackjack());
    assert!(!hand(&[R::Ace, R::Nine]).is_blackjack());
}

#[test]
fn soft_totals() {
    assert!(hand(&[R::Ace, R::Six]).is_soft());
    assert!(!hand(&[R::Ten, R::Seven]).is_soft());
    assert!(!hand(&[R::Ace, R::Six, R::Ten]).is_soft());
    assert!(hand(&[R::Ace, R::Ace, R::Five]).is_soft());
}
