mod onnx;

pub use onnx::{OnnxBackend, OnnxSession};
