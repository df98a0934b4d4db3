use crate::CameraError;
use rps_base::Tensor;
use std::time::Instant;

/// A decoded capture.
#[derive(Debug, Clone)]
pub struct Frame {
    /// RGB pixels, HWC layout `[height, width, 3]`.
    pub image: Tensor<u8>,
    /// When the capture was started, not when it finished decoding.
    pub captured_at: Instant,
}

/// A capture that produced no frame.
#[derive(Debug)]
pub struct CaptureFailure {
    pub error: CameraError,
    /// When the failed capture was started.
    pub started_at: Instant,
}

impl std::fmt::Display for CaptureFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for CaptureFailure {}
