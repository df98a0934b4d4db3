use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    Shape(String),
    Image(rps_image::ImageError),
    ModelLoad(String),
    Backend(String),
    UnsupportedDevice(Device),
    UnsupportedDtype(String),
    InvalidInput {
        name: String,
        expected_names: Vec<String>,
    },
    MissingOutput(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::Image(err) => write!(f, "image error: {err}"),
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Backend(msg) => write!(f, "backend error: {msg}"),
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
            InferError::UnsupportedDtype(msg) => write!(f, "unsupported dtype: {msg}"),
            InferError::InvalidInput {
                name,
                expected_names,
            } => write!(
                f,
                "invalid input '{name}', model expects {}",
                expected_names.join(", ")
            ),
            InferError::MissingOutput(name) => write!(f, "model produced no output '{name}'"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<rps_image::ImageError> for InferError {
    fn from(err: rps_image::ImageError) -> Self {
        InferError::Image(err)
    }
}

impl From<rps_base::TensorError> for InferError {
    fn from(err: rps_base::TensorError) -> Self {
        InferError::Shape(err.to_string())
    }
}
