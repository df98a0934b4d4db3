use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for still capture.
///
/// The defaults match a Raspberry Pi camera mounted upside down:
/// `libcamera-still --output frame.jpg --width 640 --height 480 --timeout 1 --nopreview`,
/// followed by a 180 degree rotation.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    program: String,
    output: PathBuf,
    width: u32,
    height: u32,
    timeout_ms: u32,
    rotate_180: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            program: "libcamera-still".to_string(),
            output: PathBuf::from("frame.jpg"),
            width: 640,
            height: 480,
            timeout_ms: 1,
            rotate_180: true,
        }
    }
}

impl CameraConfig {
    /// Set the capture program (e.g., "libcamera-still" or "rpicam-still").
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the file the capture program writes to. It is overwritten on every capture.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the capture width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the capture height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the capture program's timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Enable or disable the 180 degree mounting correction.
    pub fn with_rotate_180(mut self, rotate_180: bool) -> Self {
        self.rotate_180 = rotate_180;
        self
    }

    // Getters
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn rotate_180(&self) -> bool {
        self.rotate_180
    }

    /// Command line arguments passed to the capture program.
    pub fn args(&self) -> Vec<String> {
        vec![
            "--output".to_string(),
            self.output.display().to_string(),
            "--width".to_string(),
            self.width.to_string(),
            "--height".to_string(),
            self.height.to_string(),
            "--timeout".to_string(),
            self.timeout_ms.to_string(),
            "--nopreview".to_string(),
        ]
    }
}

/// Configuration for the background capture feed.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    interval: Duration,
    capacity: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(25),
            capacity: 2,
        }
    }
}

impl FeedConfig {
    /// Set the pause between two captures.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set how many undelivered captures may queue up before new ones are dropped.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
