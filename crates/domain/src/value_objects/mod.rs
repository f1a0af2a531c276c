//! Value Objects - Immutable, identity-less domain primitives

mod effort_estimate;
mod engagement_level;
mod priority_level;
mod risk_level;
mod scores;
mod sentiment_label;
mod trend_label;

pub use effort_estimate::EffortEstimate;
pub use engagement_level::EngagementLevel;
pub use priority_level::PriorityLevel;
pub use risk_level::RiskLevel;
pub use scores::{InvalidSentimentScore, InvalidUnitScore, SentimentScore, UnitScore};
pub use sentiment_label::SentimentLabel;
pub use trend_label::TrendLabel;
