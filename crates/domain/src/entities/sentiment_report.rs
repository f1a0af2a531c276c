//! Meeting sentiment report
//!
//! The canonical result of a meeting sentiment analysis, whether it came
//! from the AI backend or the lexicon fallback. Deserialization doubles as
//! schema repair: missing fields take their documented defaults, scores
//! clamp to their ranges, and unknown enum literals coerce to the field
//! default. A sequence field that is present but not an array is treated as
//! a malformed response (parse error), which callers resolve by falling
//! back to the deterministic analysis.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::{EngagementLevel, SentimentLabel, SentimentScore, UnitScore};

fn default_engagement_score() -> UnitScore {
    UnitScore::HALF
}

/// Structured sentiment analysis of a full meeting transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentReport {
    /// Overall tone of the meeting
    pub overall_sentiment: SentimentLabel,
    /// Polarity score, -1.0 (very negative) to 1.0 (very positive)
    pub sentiment_score: SentimentScore,
    /// Free-text emotion labels observed across the meeting
    pub emotions_detected: Vec<String>,
    /// Overall participant engagement
    pub engagement_level: EngagementLevel,
    /// Engagement score, 0.0 (none) to 1.0 (highly engaged)
    #[serde(default = "default_engagement_score")]
    pub engagement_score: UnitScore,
    /// Emotionally notable moments extracted from the transcript
    pub key_moments: Vec<KeyMoment>,
    /// Per-speaker sentiment breakdown
    pub speaker_analysis: Vec<SpeakerSentiment>,
    /// Actionable observations about the meeting
    pub meeting_insights: MeetingInsights,
}

impl Default for SentimentReport {
    fn default() -> Self {
        Self {
            overall_sentiment: SentimentLabel::default(),
            sentiment_score: SentimentScore::default(),
            emotions_detected: Vec::new(),
            engagement_level: EngagementLevel::default(),
            engagement_score: default_engagement_score(),
            key_moments: Vec::new(),
            speaker_analysis: Vec::new(),
            meeting_insights: MeetingInsights::default(),
        }
    }
}

impl SentimentReport {
    /// Repair an arbitrary structured value into a canonical report
    ///
    /// This is the validation seam for untrusted analysis output. It is
    /// idempotent: repairing an already-valid report returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the value is structurally
    /// malformed (for example, a sequence field holding a non-array), in
    /// which case the caller should treat the whole response as unusable.
    pub fn from_raw(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// An emotionally notable moment in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMoment {
    /// Estimated position in the meeting
    pub timestamp: String,
    /// The relevant quote
    pub text: String,
    /// Tone of the moment
    pub sentiment: SentimentLabel,
    /// Dominant emotion at that moment
    pub emotion: String,
}

/// Sentiment breakdown for one speaker
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerSentiment {
    /// Speaker name as it appears in the transcript
    pub speaker: String,
    /// The speaker's overall tone
    pub sentiment: SentimentLabel,
    /// The speaker's engagement level
    pub engagement: EngagementLevel,
    /// Emotions this speaker most frequently expressed
    pub dominant_emotions: Vec<String>,
}

/// Actionable observations distilled from the meeting
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingInsights {
    /// Signs the meeting moved work forward
    pub productivity_indicators: Vec<String>,
    /// Concerns worth following up on
    pub potential_issues: Vec<String>,
    /// Notably positive moments or outcomes
    pub positive_highlights: Vec<String>,
    /// Suggested follow-up actions
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_repairs_to_defaults() {
        let report = SentimentReport::from_raw(json!({})).unwrap();
        assert_eq!(report.overall_sentiment, SentimentLabel::Neutral);
        assert!((report.sentiment_score.value()).abs() < f64::EPSILON);
        assert_eq!(report.engagement_level, EngagementLevel::Medium);
        assert!((report.engagement_score.value() - 0.5).abs() < f64::EPSILON);
        assert!(report.emotions_detected.is_empty());
        assert!(report.key_moments.is_empty());
        assert!(report.speaker_analysis.is_empty());
        assert!(report.meeting_insights.recommendations.is_empty());
    }

    #[test]
    fn out_of_range_scores_clamp() {
        let report = SentimentReport::from_raw(json!({
            "sentiment_score": 5.0,
            "engagement_score": -2.0,
        }))
        .unwrap();
        assert!((report.sentiment_score.value() - 1.0).abs() < f64::EPSILON);
        assert!((report.engagement_score.value()).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_enum_literals_coerce_to_defaults() {
        let report = SentimentReport::from_raw(json!({
            "overall_sentiment": "euphoric",
            "engagement_level": "stratospheric",
        }))
        .unwrap();
        assert_eq!(report.overall_sentiment, SentimentLabel::Neutral);
        assert_eq!(report.engagement_level, EngagementLevel::Medium);
    }

    #[test]
    fn nested_structures_survive_repair() {
        let report = SentimentReport::from_raw(json!({
            "overall_sentiment": "positive",
            "sentiment_score": 0.6,
            "key_moments": [
                {"timestamp": "00:12", "text": "great demo", "sentiment": "positive", "emotion": "excited"},
                {"text": "partial moment"},
            ],
            "speaker_analysis": [
                {"speaker": "Dana", "sentiment": "negative", "engagement": "low"},
            ],
            "meeting_insights": {"recommendations": ["follow up on budget"]},
        }))
        .unwrap();
        assert_eq!(report.key_moments.len(), 2);
        assert_eq!(report.key_moments[0].sentiment, SentimentLabel::Positive);
        assert_eq!(report.key_moments[1].sentiment, SentimentLabel::Neutral);
        assert!(report.key_moments[1].timestamp.is_empty());
        assert_eq!(report.speaker_analysis[0].engagement, EngagementLevel::Low);
        assert_eq!(
            report.meeting_insights.recommendations,
            vec!["follow up on budget".to_string()]
        );
    }

    #[test]
    fn non_array_sequence_is_a_parse_error() {
        let result = SentimentReport::from_raw(json!({"key_moments": 42}));
        assert!(result.is_err());
    }

    #[test]
    fn repair_is_idempotent() {
        let once = SentimentReport::from_raw(json!({
            "overall_sentiment": "angry",
            "sentiment_score": -9.0,
            "engagement_level": "high",
            "emotions_detected": ["frustrated"],
        }))
        .unwrap();
        let twice =
            SentimentReport::from_raw(serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn valid_report_roundtrips_unchanged() {
        let report = SentimentReport {
            overall_sentiment: SentimentLabel::Positive,
            sentiment_score: SentimentScore::clamped(0.7),
            emotions_detected: vec!["excited".to_string()],
            engagement_level: EngagementLevel::High,
            engagement_score: UnitScore::clamped(0.9),
            ..SentimentReport::default()
        };
        let value = serde_json::to_value(&report).unwrap();
        let repaired = SentimentReport::from_raw(value).unwrap();
        assert_eq!(report, repaired);
    }
}
