use crate::Gesture;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::{Duration, Instant};

/// Where the opponent's gestures come from.
pub trait HandSource {
    fn next_hand(&mut self) -> Gesture;
}

/// Uniform draws from the three playable gestures.
#[derive(Debug, Clone)]
pub struct RandomHand<R> {
    rng: R,
}

impl<R: Rng> RandomHand<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomHand<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> HandSource for RandomHand<R> {
    fn next_hand(&mut self) -> Gesture {
        Gesture::PLAYABLE[self.rng.random_range(0..Gesture::PLAYABLE.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentEvent {
    /// Flash a gesture as part of the "thinking" animation.
    Show(Gesture),
    /// The opponent's final choice for this round.
    Commit(Gesture),
}

#[derive(Debug, Clone, Copy)]
enum State {
    Idle,
    Animating { remaining: u32, next_at: Instant },
    Committed(Gesture),
}

/// The simulated opponent.
///
/// Instead of sleeping between frames, the animation is a small timed state
/// machine polled by the caller's loop: after `start(t)` it emits `ticks`
/// `Show` events at `t, t + interval, ...` and then a `Commit` at
/// `t + ticks * interval`. Every event is an independent draw, so the
/// committed gesture does not depend on what was shown.
#[derive(Debug)]
pub struct Opponent<S> {
    hands: S,
    ticks: u32,
    interval: Duration,
    state: State,
}

impl<S: HandSource> Opponent<S> {
    pub fn new(hands: S, ticks: u32, interval: Duration) -> Self {
        Self {
            hands,
            ticks,
            interval,
            state: State::Idle,
        }
    }

    /// Begin a new animation, discarding any previous choice.
    pub fn start(&mut self, now: Instant) {
        self.state = State::Animating {
            remaining: self.ticks,
            next_at: now,
        };
    }

    /// Advance the animation. Returns the next event that is due at `now`, if any.
    ///
    /// Call repeatedly until it returns `None` to catch up after a stall.
    pub fn update(&mut self, now: Instant) -> Option<OpponentEvent> {
        let State::Animating { remaining, next_at } = self.state else {
            return None;
        };
        if now < next_at {
            return None;
        }

        let hand = self.hands.next_hand();
        if remaining > 0 {
            self.state = State::Animating {
                remaining: remaining - 1,
                next_at: next_at + self.interval,
            };
            Some(OpponentEvent::Show(hand))
        } else {
            self.state = State::Committed(hand);
            Some(OpponentEvent::Commit(hand))
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Animating { .. })
    }

    /// The last committed gesture, until the next `start`.
    pub fn committed(&self) -> Option<Gesture> {
        match self.state {
            State::Committed(hand) => Some(hand),
            _ => None,
        }
    }
}
