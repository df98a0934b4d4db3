use rps_base::Tensor;
use rps_game::{Game, GameConfig, Gesture, GestureRecognizer, HandSource, Phase};
use rps_infer::{Classifier, InferError, Session};
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct ScoresSession {
    scores: Vec<f32>,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl ScoresSession {
    fn boxed(scores: Vec<f32>) -> Box<dyn Session> {
        Box::new(Self {
            scores,
            input_names: vec!["sequential_1_input".to_string()],
            output_names: vec!["sequential_3".to_string()],
        })
    }
}

impl Session for ScoresSession {
    fn run(
        &mut self,
        _inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        let mut outputs = HashMap::new();
        outputs.insert(
            self.output_names[0].clone(),
            Tensor::new(vec![1, self.scores.len()], self.scores.clone()).unwrap(),
        );
        Ok(outputs)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

/// Recognizer returning a queue of canned answers
struct FixedRecognizer {
    answers: Vec<Result<Gesture, InferError>>,
}

impl GestureRecognizer for FixedRecognizer {
    fn recognize(&mut self, _frame: &Tensor<u8>) -> Result<Gesture, InferError> {
        if self.answers.is_empty() {
            Ok(Gesture::Rock)
        } else {
            self.answers.remove(0)
        }
    }
}

/// Always shows Paper during the animation and commits to `last`
struct FinalHand {
    last: Gesture,
    draws: usize,
    ticks: usize,
}

impl HandSource for FinalHand {
    fn next_hand(&mut self) -> Gesture {
        self.draws += 1;
        if self.draws % (self.ticks + 1) == 0 {
            self.last
        } else {
            Gesture::Paper
        }
    }
}

fn hand(last: Gesture) -> FinalHand {
    FinalHand {
        last,
        draws: 0,
        ticks: 15,
    }
}

fn frame() -> Tensor<u8> {
    Tensor::new(vec![48, 64, 3], vec![128u8; 48 * 64 * 3]).unwrap()
}

fn finish<R: GestureRecognizer, S: HandSource>(game: &mut Game<R, S>, start: Instant) {
    game.tick(start + Duration::from_secs(2));
}

#[test]
fn test_initial_texts() {
    let game = Game::new(
        FixedRecognizer { answers: vec![] },
        hand(Gesture::Rock),
        &GameConfig::default(),
    );
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.result_text(), "Make your gesture!");
    assert_eq!(game.opponent_text(), "");
    assert_eq!(game.score_text(), "Wins: 0  Losses: 0  Ties: 0");
    assert_eq!(game.status(), None);
}

#[test]
fn test_rock_beats_scissors_through_real_classifier() {
    let classifier = Classifier::new(ScoresSession::boxed(vec![0.9, 0.05, 0.05]), 224).unwrap();
    let mut game = Game::new(classifier, hand(Gesture::Scissors), &GameConfig::default());

    let start = Instant::now();
    assert!(game.play(start));
    assert_eq!(game.phase(), Phase::AwaitingFrame);

    game.offer_frame(&frame(), start, start);
    assert_eq!(game.phase(), Phase::Animating);
    assert_eq!(game.result_text(), "You chose: Rock");

    game.tick(start + Duration::from_millis(50));
    assert_eq!(game.opponent_text(), "Pi: Paper");
    assert_eq!(game.phase(), Phase::Animating);

    finish(&mut game, start);
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.opponent_text(), "The Pi Chose: Scissors");
    assert_eq!(game.result_text(), "You chose: Rock\nYou win!");
    assert_eq!(game.ledger().wins(), 1);
    assert_eq!(game.ledger().losses(), 0);
    assert_eq!(game.ledger().ties(), 0);
    assert_eq!(game.score_text(), "Wins: 1  Losses: 0  Ties: 0");
}

#[test]
fn test_out_of_range_index_plays_unknown_and_loses() {
    let classifier = Classifier::new(ScoresSession::boxed(vec![0.1, 0.1, 0.1, 0.7]), 224).unwrap();
    let mut game = Game::new(classifier, hand(Gesture::Rock), &GameConfig::default());

    let start = Instant::now();
    game.play(start);
    game.offer_frame(&frame(), start, start);
    assert_eq!(game.result_text(), "You chose: Unknown");
    finish(&mut game, start);
    assert_eq!(game.result_text(), "You chose: Unknown\nYou lose!");
    assert_eq!(game.ledger().losses(), 1);
}

#[test]
fn test_frame_from_before_play_is_ignored() {
    let mut game = Game::new(
        FixedRecognizer { answers: vec![] },
        hand(Gesture::Rock),
        &GameConfig::default(),
    );
    let before = Instant::now();
    let pressed = before + Duration::from_millis(10);
    game.play(pressed);

    game.offer_frame(&frame(), before, pressed);
    assert_eq!(game.phase(), Phase::AwaitingFrame);

    let later = pressed + Duration::from_millis(30);
    game.offer_frame(&frame(), later, later);
    assert_eq!(game.phase(), Phase::Animating);
}

#[test]
fn test_frames_outside_a_round_are_not_classified() {
    let mut game = Game::new(
        FixedRecognizer { answers: vec![] },
        hand(Gesture::Rock),
        &GameConfig::default(),
    );
    let now = Instant::now();
    game.offer_frame(&frame(), now, now);
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.result_text(), "Make your gesture!");
}

#[test]
fn test_capture_failure_skips_round() {
    let mut game = Game::new(
        FixedRecognizer { answers: vec![] },
        hand(Gesture::Rock),
        &GameConfig::default(),
    );
    let start = Instant::now();
    game.play(start);
    game.capture_failed(&"libcamera-still exited with 1", start);

    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.ledger().rounds(), 0);
    assert!(game.status().unwrap().contains("exited with 1"));

    // next good frame clears the camera message
    let later = start + Duration::from_millis(30);
    game.offer_frame(&frame(), later, later);
    assert_eq!(game.status(), None);
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_capture_failure_during_animation_keeps_round() {
    let mut game = Game::new(
        FixedRecognizer { answers: vec![] },
        hand(Gesture::Rock),
        &GameConfig::default(),
    );
    let start = Instant::now();
    game.play(start);
    game.offer_frame(&frame(), start, start);
    game.capture_failed(&"timeout", start);
    assert_eq!(game.phase(), Phase::Animating);

    finish(&mut game, start);
    assert_eq!(game.result_text(), "You chose: Rock\nIt's a tie!");
    assert_eq!(game.ledger().ties(), 1);
}

#[test]
fn test_play_ignored_while_round_running() {
    let mut game = Game::new(
        FixedRecognizer { answers: vec![] },
        hand(Gesture::Paper),
        &GameConfig::default(),
    );
    let start = Instant::now();
    assert!(game.play(start));
    assert!(!game.play(start));
    game.offer_frame(&frame(), start, start);
    assert!(!game.play(start + Duration::from_millis(200)));

    finish(&mut game, start);
    assert_eq!(game.ledger().rounds(), 1);
    assert_eq!(game.ledger().losses(), 1);
    assert!(game.play(start + Duration::from_secs(3)));
}

#[test]
fn test_classification_failure_skips_round() {
    let mut game = Game::new(
        FixedRecognizer {
            answers: vec![Err(InferError::Backend("inference failed".to_string()))],
        },
        hand(Gesture::Rock),
        &GameConfig::default(),
    );
    let start = Instant::now();
    game.play(start);
    game.offer_frame(&frame(), start, start);

    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.ledger().rounds(), 0);
    assert!(game.status().unwrap().contains("inference failed"));

    // a later good frame does not hide a classification message
    game.offer_frame(&frame(), start, start);
    assert!(game.status().is_some());

    // pressing Play again clears it
    game.play(start + Duration::from_millis(5));
    assert_eq!(game.status(), None);
}

#[test]
fn test_result_text_resets_each_round() {
    let mut game = Game::new(
        FixedRecognizer {
            answers: vec![Ok(Gesture::Rock), Ok(Gesture::Scissors)],
        },
        hand(Gesture::Paper),
        &GameConfig::default(),
    );
    let start = Instant::now();
    game.play(start);
    game.offer_frame(&frame(), start, start);
    finish(&mut game, start);
    assert_eq!(game.result_text(), "You chose: Rock\nYou lose!");

    let second = start + Duration::from_secs(3);
    game.play(second);
    game.offer_frame(&frame(), second, second);
    finish(&mut game, second);
    assert_eq!(game.result_text(), "You chose: Scissors\nYou win!");
    assert_eq!(game.score_text(), "Wins: 1  Losses: 1  Ties: 0");
}

#[test]
fn test_short_animation_config() {
    let config = GameConfig::default()
        .with_animation_ticks(2)
        .with_tick_interval(Duration::from_millis(10));
    assert_eq!(config.animation_duration(), Duration::from_millis(20));

    let mut game = Game::new(
        FixedRecognizer { answers: vec![] },
        FinalHand {
            last: Gesture::Scissors,
            draws: 0,
            ticks: 2,
        },
        &config,
    );
    let start = Instant::now();
    game.play(start);
    game.offer_frame(&frame(), start, start);
    game.tick(start + Duration::from_millis(19));
    assert_eq!(game.phase(), Phase::Animating);
    game.tick(start + Duration::from_millis(20));
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.result_text(), "You chose: Rock\nYou win!");
}

#[test]
fn test_failure_of_capture_started_before_play_keeps_round() {
    let mut game = Game::new(
        FixedRecognizer { answers: vec![] },
        hand(Gesture::Scissors),
        &GameConfig::default(),
    );
    let capture_started = Instant::now();
    let pressed = capture_started + Duration::from_millis(20);
    game.play(pressed);

    // the capture in flight when Play was pressed fails
    game.capture_failed(&"libcamera-still exited with 1", capture_started);
    assert_eq!(game.phase(), Phase::AwaitingFrame);
    assert!(game.status().is_some());

    // the next capture, started after the press, plays the round
    let fresh = capture_started + Duration::from_millis(61);
    game.offer_frame(&frame(), fresh, fresh + Duration::from_millis(60));
    assert_eq!(game.phase(), Phase::Animating);
    assert_eq!(game.status(), None);

    finish(&mut game, fresh);
    assert_eq!(game.result_text(), "You chose: Rock\nYou win!");
    assert_eq!(game.ledger().wins(), 1);
}

#[test]
fn test_failure_of_capture_started_at_press_skips_round() {
    let mut game = Game::new(
        FixedRecognizer { answers: vec![] },
        hand(Gesture::Rock),
        &GameConfig::default(),
    );
    let pressed = Instant::now();
    game.play(pressed);
    game.capture_failed(&"timeout", pressed);
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.ledger().rounds(), 0);
}
