use std::time::Duration;

/// Round timing.
#[derive(Clone, Debug)]
pub struct GameConfig {
    animation_ticks: u32,
    tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            animation_ticks: 15,
            tick_interval: Duration::from_millis(100),
        }
    }
}

impl GameConfig {
    /// Set how many random gestures the opponent flashes before committing.
    pub fn with_animation_ticks(mut self, animation_ticks: u32) -> Self {
        self.animation_ticks = animation_ticks;
        self
    }

    /// Set the time each flashed gesture stays on screen.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn animation_ticks(&self) -> u32 {
        self.animation_ticks
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Time from the start of the animation until the opponent commits.
    pub fn animation_duration(&self) -> Duration {
        self.tick_interval * self.animation_ticks
    }
}
