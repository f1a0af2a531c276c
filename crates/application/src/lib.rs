//! Application layer - The sentiment and priority analysis engines
//!
//! Hosts the two analyzers, the inference port they share, and the
//! deterministic fallbacks that keep both available when no AI backend is
//! configured or a response is unusable.

pub mod error;
pub mod ports;
pub mod services;

mod lexicon;
mod llm_json;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
