//! Trend label value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a sentiment trend over a sequence of meetings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    /// Recent average is rising
    Improving,
    /// No meaningful movement either way
    #[default]
    Stable,
    /// Recent average is falling
    Declining,
}

impl TrendLabel {
    /// The lowercase wire form of this label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stable() {
        assert_eq!(TrendLabel::default(), TrendLabel::Stable);
    }

    #[test]
    fn serialization_is_lowercase() {
        let json = serde_json::to_string(&TrendLabel::Improving).unwrap();
        assert_eq!(json, "\"improving\"");
    }
}
