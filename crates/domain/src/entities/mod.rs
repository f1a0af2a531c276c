//! Domain entities - Structured analysis inputs and results

mod realtime_signal;
mod recommendations;
mod sentiment_report;
mod task;
mod trend_report;

pub use realtime_signal::RealtimeSentimentSignal;
pub use recommendations::{PriorityRecommendations, TaskDistribution};
pub use sentiment_report::{KeyMoment, MeetingInsights, SentimentReport, SpeakerSentiment};
pub use task::{PrioritizedTask, PriorityContext, TaskAnalysis, TaskRecord};
pub use trend_report::TrendReport;
