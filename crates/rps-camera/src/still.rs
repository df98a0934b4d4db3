use crate::{Camera, CameraConfig, CameraError, Frame};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Camera backed by an external still-capture utility.
///
/// Every `recv()` runs the utility once, waits for it to exit, and decodes the
/// file it wrote. The output file is shared state on disk: it is overwritten by
/// each capture, so only one `StillCamera` should use a given path.
#[derive(Debug)]
pub struct StillCamera {
    config: CameraConfig,
}

impl Camera for StillCamera {
    async fn recv(&mut self) -> Result<Frame, CameraError> {
        let captured_at = Instant::now();
        self.run_capture().await?;
        let image = self.load().await?;
        Ok(Frame { image, captured_at })
    }
}

impl StillCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    async fn run_capture(&self) -> Result<(), CameraError> {
        let status = Command::new(self.config.program())
            .args(self.config.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| {
                CameraError::Device(format!("cannot run {}: {}", self.config.program(), e))
            })?;

        if !status.success() {
            return Err(CameraError::Capture(format!(
                "{} exited with {}",
                self.config.program(),
                status
            )));
        }
        Ok(())
    }

    async fn load(&self) -> Result<rps_base::Tensor<u8>, CameraError> {
        let bytes = tokio::fs::read(self.config.output()).await.map_err(|e| {
            CameraError::Capture(format!(
                "cannot read {}: {}",
                self.config.output().display(),
                e
            ))
        })?;

        let image = rps_image::to_rgb(&rps_image::decode_image(&bytes)?)?;
        if self.config.rotate_180() {
            Ok(rps_image::rotate_180(&image)?)
        } else {
            Ok(image)
        }
    }
}
