//! JSON payload extraction from raw model output
//!
//! Models routinely wrap their JSON in markdown code fences or surround it
//! with prose. This module cuts the payload out before parsing; it never
//! validates, so a caller still has to handle `serde_json` failures.

/// Extract the JSON payload from a model response.
///
/// Handles, in order: a ```` ```json ```` fence (case-insensitive), a bare
/// ```` ``` ```` fence, and prose around a top-level `{...}` object. An
/// unterminated fence runs to the end of the input. If nothing matches,
/// the trimmed input is returned unchanged.
pub(crate) fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if let Some(start) = find_ascii_ci(trimmed, "```json") {
        let body = &trimmed[start + "```json".len()..];
        let end = body.find("```").unwrap_or(body.len());
        return body[..end].trim();
    }

    if let Some(start) = trimmed.find("```") {
        let body = &trimmed[start + 3..];
        let end = body.find("```").unwrap_or(body.len());
        return body[..end].trim();
    }

    if let (Some(open), Some(close)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if open < close {
            return &trimmed[open..=close];
        }
    }

    trimmed
}

/// Case-insensitive search for an ASCII needle, returning a byte offset.
///
/// The needle must be pure ASCII; a match then consists of ASCII bytes
/// only, so the returned offset always lies on a char boundary.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
