use crate::ImageError;
use crates_image::{ImageBuffer, Rgb, imageops};
use rps_base::Tensor;

fn dimensions(image: &Tensor<u8>) -> Result<(usize, usize, usize), ImageError> {
    let (h, w, c) = image.hwc()?;
    if h * w * c != image.data.len() {
        return Err(ImageError::Layout(format!(
            "{}x{}x{} image carries {} bytes",
            h,
            w,
            c,
            image.data.len()
        )));
    }
    Ok((h, w, c))
}

/// Convert a 1, 2, 3 or 4 channel image to 3 channel RGB.
///
/// Gray is replicated into all three channels, alpha is dropped.
pub fn to_rgb(image: &Tensor<u8>) -> Result<Tensor<u8>, ImageError> {
    let (h, w, c) = dimensions(image)?;
    let data = match c {
        3 => image.data.clone(),
        1 => image.data.iter().flat_map(|&v| [v, v, v]).collect(),
        2 => image
            .data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect(),
        4 => image
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        other => {
            return Err(ImageError::Layout(format!(
                "cannot convert {other} channels to RGB"
            )));
        }
    };
    Ok(Tensor::new(vec![h, w, 3], data)?)
}

/// Rotate an image by 180 degrees.
pub fn rotate_180(image: &Tensor<u8>) -> Result<Tensor<u8>, ImageError> {
    let (_, _, c) = dimensions(image)?;
    if c == 0 {
        return Ok(image.clone());
    }
    // reversing pixel order is a 180 degree rotation
    let data = image
        .data
        .chunks_exact(c)
        .rev()
        .flatten()
        .copied()
        .collect();
    Ok(Tensor::new(image.shape.clone(), data)?)
}

/// Mirror an image left to right.
pub fn flip_horizontal(image: &Tensor<u8>) -> Result<Tensor<u8>, ImageError> {
    let (_, w, c) = dimensions(image)?;
    let row_len = w * c;
    if row_len == 0 {
        return Ok(image.clone());
    }
    let mut data = Vec::with_capacity(image.data.len());
    for row in image.data.chunks_exact(row_len) {
        for px in row.chunks_exact(c).rev() {
            data.extend_from_slice(px);
        }
    }
    Ok(Tensor::new(image.shape.clone(), data)?)
}

/// Resize an RGB image with bilinear filtering.
pub fn resize(image: &Tensor<u8>, width: u32, height: u32) -> Result<Tensor<u8>, ImageError> {
    let (h, w, c) = dimensions(image)?;
    if c != 3 {
        return Err(ImageError::Layout(format!(
            "resize expects 3 channels, got {c}"
        )));
    }
    if h == 0 || w == 0 || width == 0 || height == 0 {
        return Err(ImageError::Layout(format!(
            "cannot resize {w}x{h} to {width}x{height}"
        )));
    }
    if (w, h) == (width as usize, height as usize) {
        return Ok(image.clone());
    }

    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(w as u32, h as u32, image.data.clone())
            .ok_or_else(|| ImageError::Layout("RGB buffer too small".to_string()))?;
    let resized = imageops::resize(&buffer, width, height, imageops::FilterType::Triangle);

    Ok(Tensor::new(
        vec![height as usize, width as usize, 3],
        resized.into_raw(),
    )?)
}

/// Convert an RGB image to packed `0x00RRGGBB` pixels for window buffers.
pub fn rgb_to_argb(image: &Tensor<u8>) -> Result<Vec<u32>, ImageError> {
    let (_, _, c) = dimensions(image)?;
    if c != 3 {
        return Err(ImageError::Layout(format!(
            "expected 3 channels, got {c}"
        )));
    }
    Ok(image
        .data
        .chunks_exact(3)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect())
}
