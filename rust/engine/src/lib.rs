//! # bjlite-engine: Blackjack Lite Round Engine
//!
//! A deterministic single-deck blackjack engine for one player against a
//! fixed-policy dealer. Provides the deck, hand valuation with flexible Aces,
//! the round state machine, session statistics and JSONL round history, with
//! a seedable RNG so any session can be replayed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Depleting deck with an explicit Fisher-Yates shuffle on ChaCha20
//! - [`hand`] - Hand valuation, soft totals, bust and blackjack detection
//! - [`rules`] - Value tables, dealer policy and the outcome decision table
//! - [`engine`] - Round state machine: deal, hit, stand, dealer play, resolve
//! - [`stats`] - Win/loss/push counters and win rate
//! - [`logger`] - RoundRecord serialization and JSONL history writing
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use bjlite_engine::cards::{Card, Rank, Suit};
//! use bjlite_engine::hand::Hand;
//!
//! let mut hand = Hand::new();
//! hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
//! hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
//! assert_eq!(hand.value(), 20);
//! hand.add_card(Card::new(Rank::Five, Suit::Spades));
//! assert_eq!(hand.value(), 15);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use bjlite_engine::engine::Engine;
//!
//! let mut a = Engine::new(Some(42));
//! let mut b = Engine::new(Some(42));
//! a.start_new_round().unwrap();
//! b.start_new_round().unwrap();
//! assert_eq!(a.player_hand(), b.player_hand());
//! assert_eq!(a.dealer_hand(), b.dealer_hand());
//! ```
//!
//! ## Invalid Transitions
//!
//! ```rust
//! use bjlite_engine::engine::Engine;
//! use bjlite_engine::errors::GameError;
//!
//! let mut engine = Engine::new(Some(1));
//! // nothing dealt yet
//! assert!(matches!(
//!     engine.player_hit(),
//!     Err(GameError::InvalidTransition { .. })
//! ));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod rules;
pub mod stats;
