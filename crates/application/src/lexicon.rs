//! Word lists backing the lexicon-based sentiment paths
//!
//! The realtime lists include conversational markers (agreement and
//! hedging words) that only make sense on short live chunks; the
//! transcript lists swap those for outcome words that show up in full
//! meeting notes.

/// Positive markers for realtime chunks.
pub(crate) const REALTIME_POSITIVE: &[&str] = &[
    "great",
    "excellent",
    "good",
    "amazing",
    "perfect",
    "love",
    "awesome",
    "fantastic",
    "wonderful",
    "brilliant",
    "outstanding",
    "superb",
    "excited",
    "happy",
    "pleased",
    "satisfied",
    "agree",
    "yes",
    "absolutely",
    "definitely",
];

/// Negative markers for realtime chunks.
pub(crate) const REALTIME_NEGATIVE: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "horrible",
    "worst",
    "problem",
    "issue",
    "concern",
    "worried",
    "frustrated",
    "angry",
    "disappointed",
    "disagree",
    "no",
    "never",
    "impossible",
    "difficult",
    "challenging",
];

/// Hedging and filler words; they count toward confidence but not score.
pub(crate) const REALTIME_NEUTRAL: &[&str] = &[
    "okay", "fine", "maybe", "perhaps", "possibly", "might", "could", "should", "would", "think",
    "consider", "discuss", "review",
];

/// Positive markers for full transcripts.
pub(crate) const TRANSCRIPT_POSITIVE: &[&str] = &[
    "great",
    "excellent",
    "good",
    "amazing",
    "perfect",
    "love",
    "awesome",
    "fantastic",
    "wonderful",
    "brilliant",
    "outstanding",
    "superb",
    "excited",
    "happy",
    "pleased",
    "satisfied",
    "successful",
    "effective",
    "productive",
];

/// Negative markers for full transcripts.
pub(crate) const TRANSCRIPT_NEGATIVE: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "horrible",
    "worst",
    "problem",
    "issue",
    "concern",
    "worried",
    "frustrated",
    "angry",
    "disappointed",
    "failed",
    "ineffective",
    "unproductive",
    "blocked",
    "stuck",
];

/// Count the tokens that appear in `list`.
///
/// Matching is whole-word; tokens are expected lowercased.
pub(crate) fn count_matches(words: &[String], list: &[&str]) -> usize {
    words.iter().filter(|w| list.contains(&w.as_str())).count()
}

/// Lowercased whitespace tokens of `text`.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
