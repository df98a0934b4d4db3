use rand::{SeedableRng, rngs::StdRng};
use rps::{App, ClickTracker, PREVIEW_HEIGHT, PREVIEW_WIDTH, preview_from_frame};
use rps_base::Tensor;
use rps_camera::{Camera, CameraError, CaptureFeed, FeedConfig, Frame};
use rps_game::{Game, GameConfig, Gesture, GestureRecognizer, HandSource, Phase, RandomHand};
use rps_infer::InferError;
use std::time::{Duration, Instant};

struct MockCamera {
    fail: bool,
}

impl Camera for MockCamera {
    async fn recv(&mut self) -> Result<Frame, CameraError> {
        if self.fail {
            return Err(CameraError::Capture("no camera".to_string()));
        }
        let image = Tensor::new(vec![48, 64, 3], vec![200u8; 48 * 64 * 3])
            .map_err(|e| CameraError::Capture(e.to_string()))?;
        Ok(Frame {
            image,
            captured_at: Instant::now(),
        })
    }
}

/// First capture is slow and fails, every later one succeeds
struct FlakyCamera {
    captures: usize,
}

impl Camera for FlakyCamera {
    async fn recv(&mut self) -> Result<Frame, CameraError> {
        let started_at = Instant::now();
        self.captures += 1;
        if self.captures == 1 {
            tokio::time::sleep(Duration::from_millis(60)).await;
            return Err(CameraError::Capture("exited with 1".to_string()));
        }
        let image = Tensor::new(vec![48, 64, 3], vec![90u8; 48 * 64 * 3])
            .map_err(|e| CameraError::Capture(e.to_string()))?;
        Ok(Frame {
            image,
            captured_at: started_at,
        })
    }
}

struct AlwaysRock;

impl GestureRecognizer for AlwaysRock {
    fn recognize(&mut self, _frame: &Tensor<u8>) -> Result<Gesture, InferError> {
        Ok(Gesture::Rock)
    }
}

struct AlwaysScissors;

impl HandSource for AlwaysScissors {
    fn next_hand(&mut self) -> Gesture {
        Gesture::Scissors
    }
}

fn app(fail: bool) -> App<AlwaysRock, AlwaysScissors> {
    let feed = CaptureFeed::spawn(
        MockCamera { fail },
        FeedConfig::default().with_interval(Duration::from_millis(1)),
    );
    App::new(
        Game::new(AlwaysRock, AlwaysScissors, &GameConfig::default()),
        feed,
    )
}

const PLAY: (f32, f32) = (320.0, 392.0);

#[test]
fn test_click_reported_on_release() {
    let mut clicks = ClickTracker::new();
    assert_eq!(clicks.update(false, Some((1.0, 2.0))), None);
    assert_eq!(clicks.update(true, Some((1.0, 2.0))), None);
    assert!(clicks.is_down());
    assert_eq!(clicks.update(true, Some((3.0, 4.0))), None);
    assert_eq!(clicks.update(false, Some((5.0, 6.0))), Some((5.0, 6.0)));
    assert_eq!(clicks.update(false, Some((5.0, 6.0))), None);
}

#[test]
fn test_release_outside_window_is_no_click() {
    let mut clicks = ClickTracker::new();
    clicks.update(true, Some((1.0, 2.0)));
    assert_eq!(clicks.update(false, None), None);
}

#[test]
fn test_preview_is_mirrored_and_resized() {
    // left half red, right half blue
    let (h, w) = (4, 8);
    let mut data = Vec::with_capacity(h * w * 3);
    for _ in 0..h {
        for x in 0..w {
            data.extend_from_slice(if x < w / 2 { &[255, 0, 0] } else { &[0, 0, 255] });
        }
    }
    let frame = Tensor::new(vec![h, w, 3], data).unwrap();

    let preview = preview_from_frame(&frame).unwrap();
    assert_eq!(preview.len(), PREVIEW_WIDTH * PREVIEW_HEIGHT);
    assert_eq!(preview[0], 0x000000FF);
    assert_eq!(preview[PREVIEW_WIDTH - 1], 0x00FF0000);
}

#[tokio::test]
async fn test_round_through_app() {
    let mut app = app(false);
    let start = Instant::now();

    app.handle_mouse(true, Some(PLAY), start);
    app.handle_mouse(false, Some(PLAY), start);
    assert_eq!(app.game().phase(), Phase::AwaitingFrame);

    tokio::time::sleep(Duration::from_millis(20)).await;
    let now = Instant::now();
    app.pump_frames(now);
    assert!(app.has_preview());
    assert_eq!(app.game().phase(), Phase::Animating);
    assert_eq!(app.game().result_text(), "You chose: Rock");

    let buffer = app.frame(now + Duration::from_secs(2));
    assert_eq!(buffer.len(), rps::WINDOW_WIDTH * rps::WINDOW_HEIGHT);
    assert_eq!(app.game().phase(), Phase::Idle);
    assert_eq!(app.game().result_text(), "You chose: Rock\nYou win!");
    assert_eq!(app.game().score_text(), "Wins: 1  Losses: 0  Ties: 0");
}

#[tokio::test]
async fn test_click_outside_button_does_nothing() {
    let mut app = app(false);
    let now = Instant::now();
    app.handle_mouse(true, Some((10.0, 10.0)), now);
    app.handle_mouse(false, Some((10.0, 10.0)), now);
    assert_eq!(app.game().phase(), Phase::Idle);
}

#[tokio::test]
async fn test_camera_failure_skips_round() {
    let mut app = app(true);
    let start = Instant::now();
    app.handle_mouse(true, Some(PLAY), start);
    app.handle_mouse(false, Some(PLAY), start);

    tokio::time::sleep(Duration::from_millis(20)).await;
    app.pump_frames(Instant::now());
    assert!(!app.has_preview());
    assert_eq!(app.game().phase(), Phase::Idle);
    assert_eq!(app.game().ledger().rounds(), 0);
    assert!(app.game().status().unwrap().contains("no camera"));
}

#[tokio::test]
async fn test_failure_in_flight_at_press_does_not_cancel_round() {
    let feed = CaptureFeed::spawn(
        FlakyCamera { captures: 0 },
        FeedConfig::default().with_interval(Duration::from_millis(1)),
    );
    let hands = RandomHand::new(StdRng::seed_from_u64(42));
    let mut app = App::new(Game::new(AlwaysRock, hands, &GameConfig::default()), feed);

    // let the slow first capture start, then press Play while it is running
    tokio::time::sleep(Duration::from_millis(20)).await;
    let pressed = Instant::now();
    app.handle_mouse(true, Some(PLAY), pressed);
    app.handle_mouse(false, Some(PLAY), pressed);

    tokio::time::sleep(Duration::from_millis(100)).await;
    let now = Instant::now();
    app.pump_frames(now);
    assert!(app.has_preview());
    assert_eq!(app.game().phase(), Phase::Animating);
    assert_eq!(app.game().result_text(), "You chose: Rock");

    app.frame(now + Duration::from_secs(2));
    assert_eq!(app.game().phase(), Phase::Idle);
    assert_eq!(app.game().ledger().rounds(), 1);
    assert!(app.game().result_text().starts_with("You chose: Rock\n"));
}
