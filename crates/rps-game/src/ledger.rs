use crate::Outcome;
use std::fmt;

/// Win/loss/tie tally for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ledger {
    wins: u64,
    losses: u64,
    ties: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished round.
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Win => &mut self.wins,
            Outcome::Loss => &mut self.losses,
            Outcome::Tie => &mut self.ties,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }

    pub fn losses(&self) -> u64 {
        self.losses
    }

    pub fn ties(&self) -> u64 {
        self.ties
    }

    pub fn rounds(&self) -> u64 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.ties)
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}
