use crate::{
    GameConfig, Gesture, GestureRecognizer, HandSource, Ledger, Opponent, OpponentEvent, judge,
};
use rps_base::Tensor;
use std::fmt::Display;
use std::time::Instant;

const GREETING: &str = "Make your gesture!";

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round running, Play is accepted.
    Idle,
    /// Play was pressed, waiting for a capture that started afterwards.
    AwaitingFrame,
    /// Player gesture known, opponent animation running.
    Animating,
}

#[derive(Debug, Clone, Copy)]
enum Round {
    Idle,
    AwaitingFrame { requested_at: Instant },
    Animating { player: Gesture },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Capture,
    Classification,
}

/// Round controller.
///
/// Owns the recognizer (and with it the model), the opponent and the ledger.
/// Everything runs on the caller's thread: the caller feeds in button presses,
/// capture results and clock ticks, and reads back the texts to display.
pub struct Game<R, S> {
    recognizer: R,
    opponent: Opponent<S>,
    ledger: Ledger,
    round: Round,
    result_text: String,
    opponent_text: String,
    status: Option<(StatusKind, String)>,
}

impl<R: GestureRecognizer, S: HandSource> Game<R, S> {
    pub fn new(recognizer: R, hands: S, config: &GameConfig) -> Self {
        Self {
            recognizer,
            opponent: Opponent::new(hands, config.animation_ticks(), config.tick_interval()),
            ledger: Ledger::new(),
            round: Round::Idle,
            result_text: GREETING.to_string(),
            opponent_text: String::new(),
            status: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.round {
            Round::Idle => Phase::Idle,
            Round::AwaitingFrame { .. } => Phase::AwaitingFrame,
            Round::Animating { .. } => Phase::Animating,
        }
    }

    /// Start a round. Ignored (returns `false`) while another round is running.
    pub fn play(&mut self, now: Instant) -> bool {
        if !matches!(self.round, Round::Idle) {
            log::debug!("play ignored, round in progress ({:?})", self.phase());
            return false;
        }
        log::info!("round requested");
        self.status = None;
        self.round = Round::AwaitingFrame { requested_at: now };
        true
    }

    /// Hand over a successful capture.
    ///
    /// When a round is waiting and the capture started after Play was pressed,
    /// the frame is classified and the opponent starts animating.
    pub fn offer_frame(&mut self, frame: &Tensor<u8>, captured_at: Instant, now: Instant) {
        if matches!(self.status, Some((StatusKind::Capture, _))) {
            self.status = None;
        }

        let Round::AwaitingFrame { requested_at } = self.round else {
            return;
        };
        if captured_at < requested_at {
            log::debug!("skipping capture taken before play was pressed");
            return;
        }

        match self.recognizer.recognize(frame) {
            Ok(player) => {
                log::info!("player chose {}", player);
                self.result_text = format!("You chose: {}", player);
                self.opponent.start(now);
                self.round = Round::Animating { player };
            }
            Err(error) => {
                log::warn!("classification failed, round skipped: {}", error);
                self.status = Some((
                    StatusKind::Classification,
                    format!("Could not read your gesture: {}", error),
                ));
                self.round = Round::Idle;
            }
        }
    }

    /// Report a failed capture started at `started_at`.
    ///
    /// A waiting round is skipped only when the failed capture started after
    /// Play was pressed; older failures leave the round waiting for a fresh
    /// frame. The score is untouched either way.
    pub fn capture_failed(&mut self, error: &dyn Display, started_at: Instant) {
        self.status = Some((StatusKind::Capture, format!("Camera capture failed: {}", error)));
        let Round::AwaitingFrame { requested_at } = self.round else {
            return;
        };
        if started_at < requested_at {
            log::debug!("ignoring failure of a capture started before play was pressed");
            return;
        }
        log::warn!("capture failed, round skipped: {}", error);
        self.round = Round::Idle;
    }

    /// Drive the opponent animation and finish the round once it commits.
    pub fn tick(&mut self, now: Instant) {
        let Round::Animating { player } = self.round else {
            return;
        };

        while let Some(event) = self.opponent.update(now) {
            match event {
                OpponentEvent::Show(hand) => {
                    self.opponent_text = format!("Pi: {}", hand);
                }
                OpponentEvent::Commit(hand) => {
                    self.opponent_text = format!("The Pi Chose: {}", hand);
                    let outcome = judge(player, hand);
                    self.ledger.record(outcome);
                    self.result_text.push('\n');
                    self.result_text.push_str(outcome.message());
                    log::info!(
                        "round over: {} vs {}, {} ({})",
                        player,
                        hand,
                        outcome,
                        self.ledger
                    );
                    self.round = Round::Idle;
                    break;
                }
            }
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn opponent_text(&self) -> &str {
        &self.opponent_text
    }

    pub fn score_text(&self) -> String {
        self.ledger.to_string()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(_, message)| message.as_str())
    }
}
