use serde::{Deserialize, Serialize};

use crate::rules::{Outcome, Winner};

/// Lifetime win/loss/push counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    wins: u32,
    losses: u32,
    pushes: u32,
}

/// Point-in-time view of [`Statistics`] with the derived fields filled in.
///
/// `win_rate` is a percentage in `0.0..=100.0` and is left unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub total: u32,
    pub win_rate: f64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Winner::Player => self.wins += 1,
            Winner::Dealer => self.losses += 1,
            Winner::Push => self.pushes += 1,
        }
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn pushes(&self) -> u32 {
        self.pushes
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }

    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.wins) / f64::from(total) * 100.0,
        }
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            wins: self.wins,
            losses: self.losses,
            pushes: self.pushes,
            total: self.total(),
            win_rate: self.win_rate(),
        }
    }
}

impl Extend<Outcome> for Statistics {
    fn extend<I: IntoIterator<Item = Outcome>>(&mut self, iter: I) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}
