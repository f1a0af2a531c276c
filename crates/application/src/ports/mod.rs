//! Port definitions (hexagonal architecture interfaces)

pub mod inference_port;

pub use inference_port::{InferencePort, InferenceResult};
