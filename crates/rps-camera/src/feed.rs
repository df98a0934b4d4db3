use crate::{Camera, CameraError, CaptureFailure, FeedConfig, Frame};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Instant;
use tokio::sync::mpsc::{self, error::TryRecvError, error::TrySendError};
use tokio::task::JoinHandle;

type FrameResult = Result<Frame, CaptureFailure>;

/// Background capture loop.
///
/// A tokio task owns the camera, captures continuously and forwards every
/// result, frame or failure, through a bounded channel. Failures carry the
/// time their capture started, like frames do. Results are dropped
/// while the channel is full, so a slow consumer never stalls the camera.
/// Must be created inside a tokio runtime.
pub struct CaptureFeed {
    receiver: mpsc::Receiver<FrameResult>,
    cancel: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for CaptureFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureFeed")
            .field("cancelled", &self.cancel.load(Ordering::Relaxed))
            .field("running", &self.join_handle.is_some())
            .finish()
    }
}

impl CaptureFeed {
    pub fn spawn<C>(camera: C, config: FeedConfig) -> Self
    where
        C: Camera + 'static,
    {
        let (sender, receiver) = mpsc::channel(config.capacity());
        let cancel = Arc::new(AtomicBool::new(false));

        let join_handle = tokio::spawn(Self::capture_loop(
            camera,
            config,
            sender,
            Arc::clone(&cancel),
        ));

        Self {
            receiver,
            cancel,
            join_handle: Some(join_handle),
        }
    }

    async fn capture_loop<C: Camera>(
        mut camera: C,
        config: FeedConfig,
        sender: mpsc::Sender<FrameResult>,
        cancel: Arc<AtomicBool>,
    ) {
        log::info!("capture feed: starting");
        let mut failures = 0u64;
        while !cancel.load(Ordering::Relaxed) {
            let started_at = Instant::now();
            let result = camera
                .recv()
                .await
                .map_err(|error| CaptureFailure { error, started_at });
            match &result {
                Ok(_) if failures > 0 => {
                    log::info!("capture feed: recovered after {} failed captures", failures);
                    failures = 0;
                }
                Ok(_) => {}
                Err(error) => {
                    // only the first failure of a streak is worth a warning
                    if failures == 0 {
                        log::warn!("capture feed: capture failed: {}", error);
                    } else {
                        log::debug!("capture feed: capture failed again: {}", error);
                    }
                    failures += 1;
                }
            }

            match sender.try_send(result) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    log::debug!("capture feed: consumer busy, dropping capture");
                }
                Err(TrySendError::Closed(_)) => break,
            }

            tokio::time::sleep(config.interval()).await;
        }
        log::info!("capture feed: stopped");
    }

    /// Next capture result if one is waiting, without blocking.
    pub fn try_recv(&mut self) -> Option<FrameResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(stopped())),
        }
    }

    /// Wait for the next capture result.
    pub async fn recv(&mut self) -> FrameResult {
        self.receiver
            .recv()
            .await
            .ok_or_else(stopped)?
    }
}

fn stopped() -> CaptureFailure {
    CaptureFailure {
        error: CameraError::Channel("capture feed stopped".to_string()),
        started_at: Instant::now(),
    }
}

impl Drop for CaptureFeed {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.join_handle.take() {
            handle.abort();
        }
    }
}
