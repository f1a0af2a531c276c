//! Clamped score value objects
//!
//! Two bounded score types carry every numeric result produced by the
//! analyzers: [`SentimentScore`] on [-1, 1] and [`UnitScore`] on [0, 1].
//! Deserialization clamps rather than rejects, because these values arrive
//! from untrusted AI output and the repair contract says out-of-range
//! numbers resolve to the nearest bound.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{SentimentScore, UnitScore};
//!
//! let s = SentimentScore::new(0.4).expect("in range");
//! assert!((s.value() - 0.4).abs() < f64::EPSILON);
//!
//! assert!((SentimentScore::clamped(3.0).value() - 1.0).abs() < f64::EPSILON);
//! assert!(UnitScore::new(1.5).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a sentiment score is outside [-1, 1]
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid sentiment score: {0} is out of range (must be -1.0 to 1.0)")]
pub struct InvalidSentimentScore(f64);

/// Error returned when a unit-interval score is outside [0, 1]
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid score: {0} is out of range (must be 0.0 to 1.0)")]
pub struct InvalidUnitScore(f64);

/// Sentiment polarity score in [-1.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct SentimentScore(f64);

impl SentimentScore {
    /// Most negative sentiment
    pub const MIN: f64 = -1.0;
    /// Most positive sentiment
    pub const MAX: f64 = 1.0;
    /// Neutral sentiment
    pub const NEUTRAL: Self = Self(0.0);

    /// Create a new validated sentiment score
    ///
    /// # Errors
    ///
    /// Returns `InvalidSentimentScore` if the value is outside [-1, 1] or
    /// not finite.
    pub fn new(value: f64) -> Result<Self, InvalidSentimentScore> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidSentimentScore(value))
        }
    }

    /// Create a sentiment score, clamping to the valid range
    ///
    /// Non-finite input repairs to neutral (0.0).
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self::NEUTRAL
        }
    }

    /// Get the score as an f64
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<SentimentScore> for f64 {
    fn from(score: SentimentScore) -> Self {
        score.0
    }
}

/// Clamping deserialization: out-of-range numbers repair to the bound
impl<'de> Deserialize<'de> for SentimentScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::clamped(value))
    }
}

/// Score in the unit interval [0.0, 1.0]
///
/// Used for engagement, confidence, and all priority factors.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct UnitScore(f64);

impl UnitScore {
    /// Minimum score
    pub const ZERO: Self = Self(0.0);
    /// Midpoint, the default for absent AI-supplied factors
    pub const HALF: Self = Self(0.5);
    /// Maximum score
    pub const MAX: Self = Self(1.0);

    /// Create a new validated unit score
    ///
    /// # Errors
    ///
    /// Returns `InvalidUnitScore` if the value is outside [0, 1] or not
    /// finite.
    pub fn new(value: f64) -> Result<Self, InvalidUnitScore> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidUnitScore(value))
        }
    }

    /// Create a unit score, clamping to [0, 1]
    ///
    /// Non-finite input repairs to 0.0.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    /// Get the score as an f64
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for UnitScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<UnitScore> for f64 {
    fn from(score: UnitScore) -> Self {
        score.0
    }
}

/// Clamping deserialization: out-of-range numbers repair to the bound
impl<'de> Deserialize<'de> for UnitScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::clamped(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_score_new_valid() {
        assert!(SentimentScore::new(-1.0).is_ok());
        assert!(SentimentScore::new(0.0).is_ok());
        assert!(SentimentScore::new(1.0).is_ok());
    }

    #[test]
    fn sentiment_score_new_invalid() {
        assert!(SentimentScore::new(1.1).is_err());
        assert!(SentimentScore::new(-1.1).is_err());
        assert!(SentimentScore::new(f64::NAN).is_err());
        assert!(SentimentScore::new(f64::INFINITY).is_err());
    }

    #[test]
    fn sentiment_score_clamped() {
        assert!((SentimentScore::clamped(2.5).value() - 1.0).abs() < f64::EPSILON);
        assert!((SentimentScore::clamped(-7.0).value() + 1.0).abs() < f64::EPSILON);
        assert!((SentimentScore::clamped(0.3).value() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn sentiment_score_clamped_repairs_nan() {
        assert!((SentimentScore::clamped(f64::NAN).value()).abs() < f64::EPSILON);
    }

    #[test]
    fn sentiment_score_deserialization_clamps() {
        let score: SentimentScore = serde_json::from_str("42.0").unwrap();
        assert!((score.value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sentiment_score_serializes_as_number() {
        let json = serde_json::to_string(&SentimentScore::clamped(0.5)).unwrap();
        assert_eq!(json, "0.5");
    }

    #[test]
    fn unit_score_new_bounds() {
        assert!(UnitScore::new(0.0).is_ok());
        assert!(UnitScore::new(1.0).is_ok());
        assert!(UnitScore::new(-0.01).is_err());
        assert!(UnitScore::new(1.01).is_err());
    }

    #[test]
    fn unit_score_clamped() {
        assert!((UnitScore::clamped(1.7).value() - 1.0).abs() < f64::EPSILON);
        assert!((UnitScore::clamped(-0.4).value()).abs() < f64::EPSILON);
    }

    #[test]
    fn unit_score_error_message() {
        let err = UnitScore::new(2.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid score: 2 is out of range (must be 0.0 to 1.0)"
        );
    }

    #[test]
    fn unit_score_deserialization_clamps() {
        let score: UnitScore = serde_json::from_str("-3").unwrap();
        assert!((score.value()).abs() < f64::EPSILON);
    }

    #[test]
    fn defaults() {
        assert_eq!(SentimentScore::default(), SentimentScore::NEUTRAL);
        assert_eq!(UnitScore::default(), UnitScore::ZERO);
    }

    #[test]
    fn ordering() {
        assert!(UnitScore::clamped(0.2) < UnitScore::clamped(0.8));
        assert!(SentimentScore::clamped(-0.5) < SentimentScore::clamped(0.5));
    }
}
