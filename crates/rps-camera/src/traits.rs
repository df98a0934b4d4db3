use crate::{CameraError, Frame};
use std::future::Future;

/// Async camera trait for frame capture.
///
/// Each call produces one freshly captured RGB frame with shape
/// `[height, width, 3]`. An error means "no frame this time"; callers skip the
/// cycle and try again later.
pub trait Camera: Send {
    fn recv(&mut self) -> impl Future<Output = Result<Frame, CameraError>> + Send;
}
