//! Still-image capture for the game.
//!
//! `StillCamera` shells out to a still-capture utility (`libcamera-still` on a
//! Raspberry Pi) and decodes the file it writes. `CaptureFeed` runs any
//! `Camera` on a background task and hands frames to the UI thread.

pub mod config;
pub mod error;
pub mod feed;
pub mod frame;
pub mod still;
pub mod traits;

pub use config::{CameraConfig, FeedConfig};
pub use error::CameraError;
pub use feed::CaptureFeed;
pub use frame::{CaptureFailure, Frame};
pub use still::StillCamera;
pub use traits::Camera;
