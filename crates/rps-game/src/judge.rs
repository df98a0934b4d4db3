use crate::Gesture;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Line shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Loss => "You lose!",
            Outcome::Tie => "It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Decide a round from the player's point of view.
///
/// An `Unknown` player gesture never equals a playable opponent gesture and is
/// in no winning pair, so it always loses.
pub fn judge(player: Gesture, opponent: Gesture) -> Outcome {
    use Gesture::*;
    match (player, opponent) {
        (p, o) if p == o => Outcome::Tie,
        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => Outcome::Win,
        _ => Outcome::Loss,
    }
}
