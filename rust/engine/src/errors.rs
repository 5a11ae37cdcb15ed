use std::fmt;

use thiserror::Error;

use crate::engine::Phase;

/// Engine operations that are only legal in certain phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartRound,
    Hit,
    Stand,
    DealerPlay,
    DetermineWinner,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::StartRound => "start a new round",
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::DealerPlay => "play the dealer hand",
            Action::DetermineWinner => "determine the winner",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot {action} while the round is {phase}")]
    InvalidTransition { action: Action, phase: Phase },
    /// A freshly rebuilt deck had nothing to draw.
    #[error("Deck exhausted after reshuffle")]
    DeckExhausted,
}
