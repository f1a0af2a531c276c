//! Real-time sentiment signal

use serde::{Deserialize, Serialize};

use crate::value_objects::{SentimentLabel, UnitScore};

/// Cheap per-chunk sentiment signal for live transcription
///
/// Produced synchronously from a lexicon scan, never persisted. The raw
/// `score` is only present when at least one sentiment-bearing token was
/// found in the chunk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimeSentimentSignal {
    /// Tone of the chunk
    pub sentiment: SentimentLabel,
    /// Share of sentiment-bearing tokens in the chunk, capped at 1.0
    pub confidence: UnitScore,
    /// Short emotion labels for UI display
    pub emotions: Vec<String>,
    /// Raw polarity score, absent when the chunk carried no signal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl RealtimeSentimentSignal {
    /// The signal for empty or sentiment-free input
    #[must_use]
    pub fn quiet() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_signal_is_neutral_with_zero_confidence() {
        let signal = RealtimeSentimentSignal::quiet();
        assert_eq!(signal.sentiment, SentimentLabel::Neutral);
        assert!((signal.confidence.value()).abs() < f64::EPSILON);
        assert!(signal.emotions.is_empty());
        assert!(signal.score.is_none());
    }

    #[test]
    fn absent_score_is_omitted_from_json() {
        let json = serde_json::to_string(&RealtimeSentimentSignal::quiet()).unwrap();
        assert!(!json.contains("score"));
    }
}
