//! Application services

pub mod priority_engine;
pub mod scoring;
pub mod sentiment_engine;
pub mod trends;

pub use priority_engine::{PriorityEngine, priority_recommendations};
pub use scoring::PriorityFactors;
pub use sentiment_engine::SentimentEngine;
pub use trends::sentiment_trends;
