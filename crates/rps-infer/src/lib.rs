//! Image classification on top of ONNX Runtime.
//!
//! A `Backend` turns a `ModelSource` into a `Session`; a `Classifier` owns one
//! session and turns camera frames into class indices.

pub mod backend;
pub mod backends;
pub mod classifier;
pub mod device;
pub mod error;
pub mod modelsource;
pub mod preprocess;
pub mod session;

pub use backend::Backend;
pub use backends::OnnxBackend;
pub use classifier::{Classifier, Prediction, argmax};
pub use device::Device;
pub use error::InferError;
pub use modelsource::ModelSource;
pub use preprocess::preprocess;
pub use session::Session;
