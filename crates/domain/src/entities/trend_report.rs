//! Sentiment trend report

use serde::{Deserialize, Serialize};

use crate::value_objects::{SentimentLabel, TrendLabel};

/// Movement of sentiment across an ordered history of reports
///
/// Averages are absent for histories shorter than two entries, where no
/// trend can be computed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendReport {
    /// Whether sentiment is improving, declining, or stable
    pub trend: TrendLabel,
    /// Sign of the movement
    pub direction: SentimentLabel,
    /// Mean absolute difference between consecutive scores
    pub volatility: f64,
    /// Mean of the most recent (up to three) scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_average: Option<f64>,
    /// Mean over the whole history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_average: Option<f64>,
}
