use bjlite_engine::cards::{Card, Rank as R, Suit as S};
use bjlite_engine::deck::Deck;
use bjlite_engine::engine::Engine;
use bjlite_engine::rules::DEALER_STAND_ON;

// Player stands on the deal; returns the dealer's final hand size and value.
fn dealer_result(draw_order: &[Card]) -> (usize, u8) {
    let mut eng = Engine::with_deck(Deck::stacked(draw_order, 1));
    eng.start_new_round().unwrap();
    eng.player_stand().unwrap();
    eng.dealer_play().unwrap();
    (eng.dealer_hand().len(), eng.dealer_value())
}

#[test]
fn dealer_draws_on_sixteen() {
    let (len, value) = dealer_result(&[
        Card::new(R::Ten, S::Spades),
        Card::new(R::Ten, S::Clubs),
        Card::new(R::Eight, S::Spades),
        Card::new(R::Six, S::Clubs),
        Card::new(R::Two, S::Clubs),
    ]);
    assert_eq!(len, 3);
    assert_eq!(value, 18);
}

#[test]
fn dealer_stands_on_hard_seventeen() {
    let (len, value) = dealer_result(&[
        Card::new(R::Ten, S::Spades),
        Card::new(R::Ten, S::Clubs),
        Card::new(R::Eight, S::Spades),
        Card::new(R::Seven, S::Clubs),
    ]);
    assert_eq!(len, 2);
    assert_eq!(value, DEALER_STAND_ON);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let (len, value) = dealer_result(&[
        Card::new(R::Ten, S::Spades),
        Card::new(R::Ace, S::Clubs),
        Card::new(R::Eight, S::Spades),
        Card::new(R::Six, S::Clubs),
    ]);
    assert_eq!(len, 2);
    assert_eq!(value, 17);
}

#[test]
fn dealer_keeps_drawing_until_seventeen() {
    let (len, value) = dealer_result(&[
        Card::new(R::Ten, S::Spades),
        Card::new(R::Two, S::Clubs),
        Card::new(R::Nine, S::Spades),
        Card::new(R::Three, S::Clubs),
        Card::new(R::Two, S::Diamonds),
        Card::new(R::Three, S::Diamonds),
        Card::new(R::Four, S::Diamonds),
        Card::new(R::Five, S::Diamonds),
    ]);
    assert_eq!(len, 6);
    assert_eq!(value, 19);
}

#[test]
fn dealer_soft_hand_demotes_ace_and_continues() {
    // A + 5 = soft 16, draw K -> hard 16, draw 4 -> 20
    let (len, value) = dealer_result(&[
        Card::new(R::Ten, S::Spades),
        Card::new(R::Ace, S::Clubs),
        Card::new(R::Nine, S::Spades),
        Card::new(R::Five, S::Clubs),
        Card::new(R::King, S::Clubs),
        Card::new(R::Four, S::Clubs),
    ]);
    assert_eq!(len, 4);
    assert_eq!(value, 20);
}

#[test]
fn dealer_final_total_is_always_at_least_seventeen() {
    for seed in 0..200u64 {
        let mut eng = Engine::new(Some(seed));
        eng.start_new_round().unwrap();
        if eng.is_round_in_progress() {
            eng.player_stand().unwrap();
            eng.dealer_play().unwrap();
        }
        assert!(
            eng.dealer_value() >= DEALER_STAND_ON,
            "seed {} left dealer on {}",
            seed,
            eng.dealer_value()
        );
    }
}
