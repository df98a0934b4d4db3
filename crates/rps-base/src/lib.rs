pub mod logging;
pub mod tensor;

pub use logging::{StdoutLogger, init_stdout_logger};
pub use tensor::{Tensor, TensorError};

// Re-export log crate so downstream crates can use rps_base::log::*
pub use log;
