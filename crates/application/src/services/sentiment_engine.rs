//! Meeting sentiment analysis
//!
//! The engine prefers a structured AI analysis and falls back to lexicon
//! scoring whenever the backend is missing, fails, or returns something
//! that is not JSON. Neither entry point can fail from the caller's view.

use std::sync::Arc;

use tracing::{debug, error, instrument};

use domain::entities::{MeetingInsights, RealtimeSentimentSignal, SentimentReport};
use domain::value_objects::{EngagementLevel, SentimentLabel, SentimentScore, UnitScore};

use crate::error::ApplicationError;
use crate::lexicon::{
    REALTIME_NEGATIVE, REALTIME_NEUTRAL, REALTIME_POSITIVE, TRANSCRIPT_NEGATIVE,
    TRANSCRIPT_POSITIVE, count_matches, tokenize,
};
use crate::llm_json::extract_json;
use crate::ports::InferencePort;

/// Issue recorded in fallback reports so consumers can tell degraded
/// output from a real AI analysis.
pub const DEGRADED_MODE_NOTICE: &str = "Limited analysis - AI model not available";

/// Sentiment analysis engine with lexicon fallback
pub struct SentimentEngine {
    inference: Option<Arc<dyn InferencePort>>,
}

impl SentimentEngine {
    /// Create an engine backed by an inference port
    #[must_use]
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self {
            inference: Some(inference),
        }
    }

    /// Create an engine that only uses the lexicon fallback
    #[must_use]
    pub const fn without_inference() -> Self {
        Self { inference: None }
    }

    /// Analyze the sentiment of a full meeting transcript.
    ///
    /// Always returns a schema-valid report: AI responses are repaired
    /// during deserialization, and any failure along the AI path drops
    /// to the lexicon fallback.
    #[instrument(skip(self, transcript), fields(transcript_len = transcript.len()))]
    pub async fn analyze_meeting_sentiment(&self, transcript: &str) -> SentimentReport {
        let Some(inference) = &self.inference else {
            debug!("no inference backend configured, using lexicon fallback");
            return fallback_analysis(transcript);
        };

        match ai_analysis(inference.as_ref(), transcript).await {
            Ok(report) => report,
            Err(err) => {
                error!(error = %err, "AI sentiment analysis failed, using lexicon fallback");
                fallback_analysis(transcript)
            }
        }
    }

    /// Quick lexicon-only sentiment for a live transcription chunk.
    ///
    /// Confidence is the share of the chunk's words that carry sentiment,
    /// so sparse chunks report low confidence. Empty chunks and chunks
    /// with no sentiment words at all return the quiet neutral signal
    /// without a raw score.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn analyze_real_time_sentiment(&self, text_chunk: &str) -> RealtimeSentimentSignal {
        if text_chunk.trim().is_empty() {
            return RealtimeSentimentSignal::quiet();
        }

        let words = tokenize(text_chunk);
        let positive = count_matches(&words, REALTIME_POSITIVE);
        let negative = count_matches(&words, REALTIME_NEGATIVE);
        let neutral = count_matches(&words, REALTIME_NEUTRAL);

        let sentiment_words = positive + negative + neutral;
        if sentiment_words == 0 {
            return RealtimeSentimentSignal::quiet();
        }

        let score = (positive as f64 - negative as f64) / words.len() as f64;
        let confidence = sentiment_words as f64 / words.len() as f64;

        let (sentiment, emotions): (SentimentLabel, &[&str]) = if score > 0.1 {
            let emotions: &[&str] = if score > 0.2 {
                &["optimistic", "engaged"]
            } else {
                &["positive"]
            };
            (SentimentLabel::Positive, emotions)
        } else if score < -0.1 {
            let emotions: &[&str] = if score < -0.2 {
                &["concerned", "frustrated"]
            } else {
                &["negative"]
            };
            (SentimentLabel::Negative, emotions)
        } else {
            (SentimentLabel::Neutral, &["neutral", "thoughtful"])
        };

        RealtimeSentimentSignal {
            sentiment,
            confidence: UnitScore::clamped(confidence),
            emotions: emotions.iter().map(ToString::to_string).collect(),
            score: Some(score),
        }
    }
}

async fn ai_analysis(
    inference: &dyn InferencePort,
    transcript: &str,
) -> Result<SentimentReport, ApplicationError> {
    let prompt = sentiment_prompt(transcript);
    let result = inference.generate(&prompt).await?;
    debug!(
        model = %inference.current_model(),
        latency_ms = result.latency_ms,
        "sentiment analysis response received"
    );

    let payload = extract_json(&result.content);
    let raw: serde_json::Value = serde_json::from_str(payload)
        .map_err(|err| ApplicationError::InvalidResponse(err.to_string()))?;
    SentimentReport::from_raw(raw).map_err(|err| ApplicationError::InvalidResponse(err.to_string()))
}

fn sentiment_prompt(transcript: &str) -> String {
    format!(
        r#"Analyze the sentiment and emotional tone of this meeting transcript. Provide a detailed analysis in JSON format.

Transcript:
{transcript}

Required JSON format:
{{
    "overall_sentiment": "positive|neutral|negative",
    "sentiment_score": 0.0,
    "emotions_detected": ["emotion1", "emotion2"],
    "engagement_level": "high|medium|low",
    "engagement_score": 0.0,
    "key_moments": [
        {{
            "timestamp": "estimated_time",
            "text": "relevant_quote",
            "sentiment": "positive|neutral|negative",
            "emotion": "specific_emotion"
        }}
    ],
    "speaker_analysis": [
        {{
            "speaker": "speaker_name",
            "sentiment": "positive|neutral|negative",
            "engagement": "high|medium|low",
            "dominant_emotions": ["emotion1", "emotion2"]
        }}
    ],
    "meeting_insights": {{
        "productivity_indicators": ["indicator1", "indicator2"],
        "potential_issues": ["issue1", "issue2"],
        "positive_highlights": ["highlight1", "highlight2"],
        "recommendations": ["recommendation1", "recommendation2"]
    }}
}}

Rules:
1. sentiment_score: -1.0 (very negative) to 1.0 (very positive)
2. engagement_score: 0.0 (no engagement) to 1.0 (highly engaged)
3. Identify specific emotions: excited, frustrated, confused, confident, concerned, etc.
4. Extract 3-5 key emotional moments from the meeting
5. Provide actionable insights and recommendations
6. Output ONLY valid JSON"#
    )
}

/// Lexicon scoring over the whole transcript.
///
/// Thresholds are tighter than the realtime path because sentiment words
/// are diluted across a full meeting.
fn fallback_analysis(transcript: &str) -> SentimentReport {
    let words = tokenize(transcript);
    let positive = count_matches(&words, TRANSCRIPT_POSITIVE);
    let negative = count_matches(&words, TRANSCRIPT_NEGATIVE);

    let score = (positive as f64 - negative as f64) / words.len().max(1) as f64;

    let (overall_sentiment, engagement_level) = if score > 0.05 {
        let engagement = if score > 0.1 {
            EngagementLevel::High
        } else {
            EngagementLevel::Medium
        };
        (SentimentLabel::Positive, engagement)
    } else if score < -0.05 {
        let engagement = if score < -0.1 {
            EngagementLevel::Low
        } else {
            EngagementLevel::Medium
        };
        (SentimentLabel::Negative, engagement)
    } else {
        (SentimentLabel::Neutral, EngagementLevel::Medium)
    };

    SentimentReport {
        overall_sentiment,
        sentiment_score: SentimentScore::clamped(score),
        emotions_detected: vec![overall_sentiment.to_string()],
        engagement_level,
        engagement_score: UnitScore::clamped(0.5 + score),
        key_moments: Vec::new(),
        speaker_analysis: Vec::new(),
        meeting_insights: MeetingInsights {
            productivity_indicators: vec!["Basic sentiment analysis completed".to_string()],
            potential_issues: vec![DEGRADED_MODE_NOTICE.to_string()],
            positive_highlights: Vec::new(),
            recommendations: vec![
                "Configure an AI model for detailed sentiment analysis".to_string(),
            ],
        },
    }
}
