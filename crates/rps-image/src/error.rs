use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Layout(String),
    Tensor(rps_base::TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Layout(msg) => write!(f, "layout error: {msg}"),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<rps_base::TensorError> for ImageError {
    fn from(err: rps_base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}
