//! Sentiment label value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall sentiment classification
///
/// Also used as the *direction* of a sentiment trend. Deserialization is
/// lenient: unrecognized or non-string values coerce to [`SentimentLabel::Neutral`]
/// so that untrusted analysis output never surfaces an invalid literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Positive tone
    Positive,
    /// Neither clearly positive nor negative
    #[default]
    Neutral,
    /// Negative tone
    Negative,
}

impl SentimentLabel {
    /// Coerce a free-text label to a known variant, defaulting to neutral
    #[must_use]
    pub fn coerce(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// The lowercase wire form of this label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// All labels
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Positive, Self::Neutral, Self::Negative]
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            _ => Err("Invalid sentiment label"),
        }
    }
}

impl<'de> Deserialize<'de> for SentimentLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map_or_else(Self::default, Self::coerce))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        assert_eq!(SentimentLabel::default(), SentimentLabel::Neutral);
    }

    #[test]
    fn coerce_known_labels() {
        assert_eq!(SentimentLabel::coerce("positive"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::coerce("NEGATIVE"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::coerce(" neutral "), SentimentLabel::Neutral);
    }

    #[test]
    fn coerce_unknown_falls_back_to_neutral() {
        assert_eq!(SentimentLabel::coerce("ecstatic"), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::coerce(""), SentimentLabel::Neutral);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("positive".parse::<SentimentLabel>().is_ok());
        assert!("ecstatic".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn serialization_is_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }

    #[test]
    fn deserialization_coerces_invalid_literal() {
        let label: SentimentLabel = serde_json::from_str("\"very happy\"").unwrap();
        assert_eq!(label, SentimentLabel::Neutral);
    }

    #[test]
    fn deserialization_coerces_non_string() {
        let label: SentimentLabel = serde_json::from_str("42").unwrap();
        assert_eq!(label, SentimentLabel::Neutral);
    }

    #[test]
    fn serialization_roundtrip() {
        for label in SentimentLabel::all() {
            let json = serde_json::to_string(&label).unwrap();
            let parsed: SentimentLabel = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, label);
        }
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(format!("{}", SentimentLabel::Negative), "negative");
    }
}
