use crate::InferError;
use rps_base::Tensor;

/// Turn a camera frame into classifier input.
///
/// Converts to RGB, resizes to `size x size` with bilinear filtering, scales
/// to `[0, 1]` and adds a batch dimension: the result has shape
/// `[1, size, size, 3]`. Same frame in, same tensor out.
pub fn preprocess(frame: &Tensor<u8>, size: u32) -> Result<Tensor<f32>, InferError> {
    let (h, w, c) = frame.hwc()?;
    if h == 0 || w == 0 {
        return Err(InferError::Shape(format!(
            "frame dimensions must be non-zero, got {}x{}",
            w, h
        )));
    }
    if !(1..=4).contains(&c) {
        return Err(InferError::Shape(format!(
            "expected 1 to 4 channels, got {}",
            c
        )));
    }

    let rgb = rps_image::to_rgb(frame)?;
    let resized = rps_image::resize(&rgb, size, size)?;
    let data = resized.data.iter().map(|&v| v as f32 / 255.0).collect();

    Ok(Tensor::new(vec![1, size as usize, size as usize, 3], data)?)
}
