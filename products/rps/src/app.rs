use crate::{
    Button, ButtonState, Canvas, PREVIEW_HEIGHT, PREVIEW_WIDTH, View, WINDOW_HEIGHT, WINDOW_WIDTH,
    render,
};
use rps_base::Tensor;
use rps_camera::{CameraError, CaptureFailure, CaptureFeed};
use rps_game::{Game, GestureRecognizer, HandSource, Phase};
use rps_image::ImageError;
use std::time::Instant;

/// Mirror a camera frame and shrink it to preview size, packed for the window.
pub fn preview_from_frame(frame: &Tensor<u8>) -> Result<Vec<u32>, ImageError> {
    let mirrored = rps_image::flip_horizontal(frame)?;
    let small = rps_image::resize(&mirrored, PREVIEW_WIDTH as u32, PREVIEW_HEIGHT as u32)?;
    rps_image::rgb_to_argb(&small)
}

/// Turns polled mouse button state into click events.
///
/// A click is reported when the button goes from down to up, at the position
/// of the release.
#[derive(Debug, Default)]
pub struct ClickTracker {
    was_down: bool,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_down(&self) -> bool {
        self.was_down
    }

    pub fn update(&mut self, down: bool, position: Option<(f32, f32)>) -> Option<(f32, f32)> {
        let released = self.was_down && !down;
        self.was_down = down;
        if released { position } else { None }
    }
}

/// The game window's state without the window itself.
///
/// Each loop iteration the caller feeds mouse input and the clock, then draws
/// the returned framebuffer.
pub struct App<R, S> {
    game: Game<R, S>,
    feed: CaptureFeed,
    canvas: Canvas,
    button: Button,
    clicks: ClickTracker,
    hovering: bool,
    preview: Option<Vec<u32>>,
}

impl<R: GestureRecognizer, S: HandSource> App<R, S> {
    pub fn new(game: Game<R, S>, feed: CaptureFeed) -> Self {
        Self {
            game,
            feed,
            canvas: Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            button: Button::play(),
            clicks: ClickTracker::new(),
            hovering: false,
            preview: None,
        }
    }

    pub fn game(&self) -> &Game<R, S> {
        &self.game
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Apply the left mouse button state. A release over Play starts a round.
    pub fn handle_mouse(&mut self, down: bool, position: Option<(f32, f32)>, now: Instant) {
        self.hovering = position.is_some_and(|(x, y)| self.button.contains(x, y));
        if let Some((x, y)) = self.clicks.update(down, position) {
            if self.button.contains(x, y) {
                self.game.play(now);
            }
        }
    }

    /// Consume every capture result waiting in the feed.
    pub fn pump_frames(&mut self, now: Instant) {
        while let Some(result) = self.feed.try_recv() {
            match result {
                Ok(frame) => {
                    match preview_from_frame(&frame.image) {
                        Ok(preview) => self.preview = Some(preview),
                        Err(error) => log::warn!("cannot build preview: {}", error),
                    }
                    self.game.offer_frame(&frame.image, frame.captured_at, now);
                }
                Err(CaptureFailure { error, started_at }) => {
                    let stopped = matches!(error, CameraError::Channel(_));
                    self.game.capture_failed(&error, started_at);
                    if stopped {
                        break;
                    }
                }
            }
        }
    }

    /// Advance the round and draw the window contents.
    pub fn frame(&mut self, now: Instant) -> &[u32] {
        self.game.tick(now);

        let button = if self.game.phase() != Phase::Idle {
            ButtonState::Disabled
        } else if self.clicks.is_down() && self.hovering {
            ButtonState::Pressed
        } else {
            ButtonState::Ready
        };
        let score = self.game.score_text();
        let view = View {
            preview: self.preview.as_deref(),
            result: self.game.result_text(),
            opponent: self.game.opponent_text(),
            score: &score,
            status: self.game.status(),
            button,
        };
        render(&mut self.canvas, &self.button, &view);
        self.canvas.buffer()
    }
}
