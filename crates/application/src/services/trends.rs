//! Sentiment trend detection over a meeting history

use domain::entities::{SentimentReport, TrendReport};
use domain::value_objects::{SentimentLabel, TrendLabel};

/// Window of most recent reports compared against the earlier baseline.
const RECENT_WINDOW: usize = 3;

/// Threshold the recent-vs-earlier delta must cross to leave "stable".
const TREND_THRESHOLD: f64 = 0.1;

/// Detect the sentiment trend across a chronological report history.
///
/// Compares the average of the last three scores against the average of
/// everything before them (or the first score when the history is short).
/// Volatility is the mean absolute difference between consecutive scores.
/// Fewer than two reports yield the stable/neutral default.
#[must_use]
pub fn sentiment_trends(history: &[SentimentReport]) -> TrendReport {
    if history.len() < 2 {
        return TrendReport::default();
    }

    let scores: Vec<f64> = history
        .iter()
        .map(|report| report.sentiment_score.value())
        .collect();

    let recent = &scores[scores.len().saturating_sub(RECENT_WINDOW)..];
    let recent_average = mean(recent);
    let earlier_average = if scores.len() > RECENT_WINDOW {
        mean(&scores[..scores.len() - RECENT_WINDOW])
    } else {
        scores[0]
    };

    let delta = recent_average - earlier_average;
    let (trend, direction) = if delta > TREND_THRESHOLD {
        (TrendLabel::Improving, SentimentLabel::Positive)
    } else if delta < -TREND_THRESHOLD {
        (TrendLabel::Declining, SentimentLabel::Negative)
    } else {
        (TrendLabel::Stable, SentimentLabel::Neutral)
    };

    let volatility = scores
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .sum::<f64>()
        / (scores.len() - 1) as f64;

    TrendReport {
        trend,
        direction,
        volatility,
        recent_average: Some(recent_average),
        overall_average: Some(mean(&scores)),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
