use {
    minifb::{MouseButton, MouseMode, Window, WindowOptions},
    rps::*,
    rps_base::log,
    rps_camera::{CameraConfig, CaptureFeed, FeedConfig, StillCamera},
    rps_game::{Game, GameConfig, RandomHand},
    rps_infer::{Classifier, ModelSource, OnnxBackend},
    std::time::Instant,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    rps_base::init_stdout_logger();

    log::info!("loading gesture model");
    let backend = OnnxBackend::cpu();
    let classifier = match Classifier::load(
        &backend,
        ModelSource::File(MODEL_PATH.into()),
        MODEL_INPUT_SIZE,
    ) {
        Ok(classifier) => classifier,
        Err(error) => {
            log::error!("cannot load {}: {}", MODEL_PATH, error);
            return Err(error.into());
        }
    };

    log::info!("starting camera");
    let feed = CaptureFeed::spawn(
        StillCamera::new(CameraConfig::default()),
        FeedConfig::default(),
    );

    let game = Game::new(classifier, RandomHand::from_os_rng(), &GameConfig::default());
    let mut app = App::new(game, feed);

    let mut window = match Window::new(
        WINDOW_TITLE,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WindowOptions::default(),
    ) {
        Ok(window) => window,
        Err(error) => {
            log::error!("cannot open window: {}", error);
            return Err(error.into());
        }
    };
    window.set_target_fps(60);

    log::info!("ready");
    while window.is_open() {
        let now = Instant::now();
        app.handle_mouse(
            window.get_mouse_down(MouseButton::Left),
            window.get_mouse_pos(MouseMode::Discard),
            now,
        );
        app.pump_frames(now);
        let buffer = app.frame(now);
        window.update_with_buffer(buffer, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    }

    log::info!("window closed, {}", app.game().ledger());
    Ok(())
}
