use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{Action, GameError};
use crate::hand::Hand;
use crate::logger::RoundRecord;
use crate::rules::{dealer_must_draw, resolve, Outcome, RESHUFFLE_THRESHOLD};
use crate::stats::{Statistics, StatisticsSnapshot};

/// Where the engine is within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No round has been dealt yet.
    Idle,
    /// Four cards are out and the player has not acted.
    Dealt,
    /// The player has hit at least once and may keep going.
    PlayerTurn,
    /// The player stood (or holds a natural); the dealer policy runs next.
    DealerTurn,
    /// Outcome fixed and counted. A new round may start.
    Resolved,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Idle => "idle",
            Phase::Dealt => "dealt",
            Phase::PlayerTurn => "in the player turn",
            Phase::DealerTurn => "in the dealer turn",
            Phase::Resolved => "resolved",
        })
    }
}

/// Round engine for a single player against the house dealer.
/// Owns the deck, both hands and the session statistics.
///
/// A round is settled exactly once, at the moment it becomes [`Phase::Resolved`]:
/// when the player busts, when the dealer finishes drawing, or straight after
/// the deal on a player natural. [`Engine::determine_winner`] reports that
/// outcome and never counts it twice.
///
/// # Examples
///
/// ```
/// use bjlite_engine::engine::{Engine, Phase};
///
/// let mut engine = Engine::new(Some(12345));
/// engine.start_new_round().expect("round starts from idle");
///
/// if engine.phase() != Phase::Resolved {
///     engine.player_stand().unwrap();
///     engine.dealer_play().unwrap();
/// }
/// let outcome = engine.determine_winner().unwrap();
/// assert_eq!(engine.statistics().total, 1);
/// println!("{}", outcome);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    stats: Statistics,
    phase: Phase,
    /// Outcome of the most recently resolved round
    outcome: Option<Outcome>,
    /// Rounds dealt so far this session (1-based once dealing starts)
    round: u32,
    /// Seed the deck RNG was built from, when known
    seed: Option<u64>,
    reshuffle_threshold: usize,
}

impl Engine {
    /// Fresh session with empty statistics and a shuffled deck.
    ///
    /// Without a seed one is drawn from the thread RNG; [`Engine::seed`]
    /// reports it either way so the session can be replayed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let mut engine = Self::with_deck(deck);
        engine.seed = Some(seed);
        engine
    }

    /// Session over a deck prepared by the caller, used as-is.
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            stats: Statistics::new(),
            phase: Phase::Idle,
            outcome: None,
            round: 0,
            seed: None,
            reshuffle_threshold: RESHUFFLE_THRESHOLD,
        }
    }

    /// Override the minimum deck size required before a deal.
    pub fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    pub fn start_new_round(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Idle | Phase::Resolved => {}
            phase => {
                return Err(GameError::InvalidTransition {
                    action: Action::StartRound,
                    phase,
                })
            }
        }

        if self.deck.cards_remaining() < self.reshuffle_threshold {
            info!(
                remaining = self.deck.cards_remaining(),
                threshold = self.reshuffle_threshold,
                "reshuffling deck before round"
            );
            self.deck.reset();
        }

        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.round += 1;

        // player, dealer, player, dealer
        for _ in 0..2 {
            let c = self.draw_card()?;
            self.player.add_card(c);
            let c = self.draw_card()?;
            self.dealer.add_card(c);
        }
        self.phase = Phase::Dealt;
        debug!(
            round = self.round,
            player = self.player.value(),
            dealer_up = ?self.dealer_upcard(),
            remaining = self.deck.cards_remaining(),
            "dealt round"
        );

        if self.player.is_blackjack() {
            debug!(round = self.round, "player natural, skipping player turn");
            self.phase = Phase::DealerTurn;
            self.dealer_play()?;
        }
        Ok(())
    }

    /// Deal one card to the player. Returns whether the player may act again.
    ///
    /// A bust resolves the round on the spot as a loss; the dealer does not play.
    pub fn player_hit(&mut self) -> Result<bool, GameError> {
        self.expect_player_turn(Action::Hit)?;
        let card = self.draw_card()?;
        self.player.add_card(card);
        debug!(round = self.round, card = ?card, value = self.player.value(), "player hit");

        if self.player.is_bust() {
            self.settle();
            return Ok(false);
        }
        self.phase = Phase::PlayerTurn;
        Ok(true)
    }

    pub fn player_stand(&mut self) -> Result<(), GameError> {
        self.expect_player_turn(Action::Stand)?;
        debug!(round = self.round, value = self.player.value(), "player stands");
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// Run the fixed dealer policy, then settle the round.
    pub fn dealer_play(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::DealerTurn {
            return Err(GameError::InvalidTransition {
                action: Action::DealerPlay,
                phase: self.phase,
            });
        }
        while dealer_must_draw(&self.dealer) {
            let card = self.draw_card()?;
            self.dealer.add_card(card);
            debug!(round = self.round, card = ?card, value = self.dealer.value(), "dealer draws");
        }
        self.settle();
        Ok(())
    }

    /// Stand, let the dealer play and report the outcome in one call.
    pub fn stand_and_resolve(&mut self) -> Result<Outcome, GameError> {
        self.player_stand()?;
        self.dealer_play()?;
        self.determine_winner()
    }

    /// Outcome of the current round. Only available once it is resolved.
    pub fn determine_winner(&self) -> Result<Outcome, GameError> {
        match (self.phase, self.outcome) {
            (Phase::Resolved, Some(outcome)) => Ok(outcome),
            (phase, _) => Err(GameError::InvalidTransition {
                action: Action::DetermineWinner,
                phase,
            }),
        }
    }

    pub fn statistics(&self) -> StatisticsSnapshot {
        self.stats.snapshot()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_round_in_progress(&self) -> bool {
        !matches!(self.phase, Phase::Idle | Phase::Resolved)
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }

    /// The dealer card shown face up during the player turn.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    pub fn round_number(&self) -> u32 {
        self.round
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// History record for the current round, once it is resolved.
    pub fn round_record(&self, round_id: String) -> Option<RoundRecord> {
        let outcome = self.determine_winner().ok()?;
        Some(RoundRecord {
            round_id,
            seed: self.seed,
            round: self.round,
            player: self.player.cards().to_vec(),
            dealer: self.dealer.cards().to_vec(),
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            outcome,
            ts: None,
        })
    }

    fn expect_player_turn(&self, action: Action) -> Result<(), GameError> {
        match self.phase {
            Phase::Dealt | Phase::PlayerTurn => Ok(()),
            phase => Err(GameError::InvalidTransition { action, phase }),
        }
    }

    fn draw_card(&mut self) -> Result<Card, GameError> {
        if self.deck.is_empty() {
            warn!(round = self.round, "deck exhausted mid-round, reshuffling a fresh deck");
            self.deck.reset();
        }
        self.deck.draw().ok_or(GameError::DeckExhausted)
    }

    fn settle(&mut self) {
        let outcome = resolve(&self.player, &self.dealer);
        self.stats.record(outcome);
        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;
        info!(
            round = self.round,
            outcome = %outcome,
            player = self.player.value(),
            dealer = self.dealer.value(),
            "round resolved"
        );
    }
}
