//! Rules and round flow of the game, independent of camera and window.

pub mod config;
pub mod game;
pub mod gesture;
pub mod judge;
pub mod ledger;
pub mod opponent;
pub mod recognizer;

pub use config::GameConfig;
pub use game::{Game, Phase};
pub use gesture::Gesture;
pub use judge::{Outcome, judge};
pub use ledger::Ledger;
pub use opponent::{HandSource, Opponent, OpponentEvent, RandomHand};
pub use recognizer::GestureRecognizer;
