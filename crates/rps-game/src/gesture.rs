use std::fmt;

/// A hand gesture, or `Unknown` when the classifier produced an index outside the label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Unknown,
}

impl Gesture {
    /// Gestures a player can actually show, in model output order.
    pub const PLAYABLE: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Map a classifier output index to its label.
    pub fn from_index(index: usize) -> Self {
        Self::PLAYABLE
            .get(index)
            .copied()
            .unwrap_or(Gesture::Unknown)
    }

    pub fn is_playable(self) -> bool {
        self != Gesture::Unknown
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
            Gesture::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}
