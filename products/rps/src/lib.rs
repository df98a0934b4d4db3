//! Rock, paper, scissors against the camera.

pub mod app;
pub mod canvas;
pub mod view;

pub use app::{App, ClickTracker, preview_from_frame};
pub use canvas::{Canvas, pack};
pub use view::{
    Button, ButtonState, PREVIEW_HEIGHT, PREVIEW_WIDTH, View, WINDOW_HEIGHT, WINDOW_WIDTH, render,
};

pub const WINDOW_TITLE: &str = "Rock, Paper, Scissors";
pub const MODEL_PATH: &str = "model_unquant.onnx";
pub const MODEL_INPUT_SIZE: u32 = 224;
