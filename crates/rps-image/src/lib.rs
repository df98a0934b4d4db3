//! Image decoding and pixel operations for the game.
//!
//! Every image is a `Tensor<u8>` in HWC layout: `[height, width, channels]`.

pub mod error;
pub mod ops;

pub use error::ImageError;
pub use ops::{flip_horizontal, resize, rgb_to_argb, rotate_180, to_rgb};

use crates_image::DynamicImage;
use rps_base::Tensor;

/// Decodes an image from raw bytes into an 8-bit tensor.
///
/// The format is sniffed from the data, not from a file name. 8-bit images keep
/// their channel count (1, 2, 3 or 4). Deeper images are reduced to 8-bit RGB,
/// or RGBA when they carry alpha.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub fn decode_image(data: &[u8]) -> Result<Tensor<u8>, ImageError> {
    let img = crates_image::load_from_memory(data)?;

    let (width, height, channels, raw) = match img {
        DynamicImage::ImageLuma8(buf) => (buf.width(), buf.height(), 1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (buf.width(), buf.height(), 2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (buf.width(), buf.height(), 3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (buf.width(), buf.height(), 4, buf.into_raw()),
        other if other.color().has_alpha() => {
            let buf = other.to_rgba8();
            (buf.width(), buf.height(), 4, buf.into_raw())
        }
        other => {
            let buf = other.to_rgb8();
            (buf.width(), buf.height(), 3, buf.into_raw())
        }
    };

    Ok(Tensor::new(
        vec![height as usize, width as usize, channels],
        raw,
    )?)
}
