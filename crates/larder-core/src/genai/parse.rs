//! Optimistic parsing of model replies.
//!
//! The model is asked for JSON but nothing guarantees it complies. A reply
//! that parses yields `Parsed`; anything else yields `Fallback` carrying
//! the use case's typed default, so the gateway never fails its caller
//! over a malformed reply. Content that parses but carries the wrong
//! values passes through uninspected; the contract is parseability, not
//! schema validation.

use serde::de::DeserializeOwned;
use tracing::warn;

/// Outcome of parsing a model reply.
///
/// `Fallback` means "the model produced nothing usable"; `Parsed` with an
/// empty collection means "the model produced the expected empty case".
/// Callers that care can tell the two apart; callers that do not can just
/// take [`Generated::into_inner`].
#[derive(Debug, Clone, PartialEq)]
pub enum Generated<T> {
    /// The reply parsed into the expected shape.
    Parsed(T),
    /// The reply did not parse; the value is the documented default.
    Fallback(T),
}

impl<T> Generated<T> {
    /// Unwrap the value, whichever way it was produced.
    pub fn into_inner(self) -> T {
        match self {
            Self::Parsed(value) | Self::Fallback(value) => value,
        }
    }

    /// True when the reply failed to parse and the default was substituted.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Parse a raw model reply, falling back to `T::default()` on failure.
///
/// Markdown code fences are stripped first; models regularly wrap JSON in
/// ```` ```json ```` blocks despite instructions not to.
pub fn parse_or_default<T>(use_case: &str, raw: &str) -> Generated<T>
where
    T: DeserializeOwned + Default,
{
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str(cleaned) {
        Ok(value) => Generated::Parsed(value),
        Err(err) => {
            warn!(
                use_case,
                error = %err,
                reply_len = raw.len(),
                "model reply did not parse; substituting default"
            );
            Generated::Fallback(T::default())
        }
    }
}

/// Strip a surrounding markdown code fence, if present.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::genai::types::{MetricsReport, RecommendationSet, WeeklyMenuPlan};

    #[test]
    fn valid_json_parses() {
        let raw = r#"{"recommendations":["Cook once, eat twice"]}"#;
        let outcome: Generated<RecommendationSet> = parse_or_default("test", raw);
        assert!(!outcome.is_fallback());
        assert_eq!(
            outcome.into_inner().recommendations,
            vec!["Cook once, eat twice".to_string()]
        );
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let raw = "Sorry, I cannot help with that.";
        let outcome: Generated<RecommendationSet> = parse_or_default("test", raw);
        assert!(outcome.is_fallback());
        assert!(outcome.into_inner().recommendations.is_empty());
    }

    #[test]
    fn fallback_metrics_are_zero_valued() {
        let outcome: Generated<MetricsReport> = parse_or_default("test", "not json at all");
        assert!(outcome.is_fallback());
        let report = outcome.into_inner();
        assert_eq!(report.metrics.waste_percentage, 0.0);
        assert_eq!(report.metrics.estimated_savings, 0.0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn code_fenced_json_parses() {
        let raw = "```json\n{\"weeklyMenu\":[]}\n```";
        let outcome: Generated<WeeklyMenuPlan> = parse_or_default("test", raw);
        assert!(!outcome.is_fallback());
    }

    #[test]
    fn fence_without_info_string_parses() {
        let raw = "```\n{\"recommendations\":[]}\n```";
        let outcome: Generated<RecommendationSet> = parse_or_default("test", raw);
        assert!(!outcome.is_fallback());
    }

    #[test]
    fn parsed_empty_differs_from_fallback() {
        let parsed: Generated<RecommendationSet> =
            parse_or_default("test", r#"{"recommendations":[]}"#);
        let fallback: Generated<RecommendationSet> = parse_or_default("test", "nope");
        assert!(!parsed.is_fallback());
        assert!(fallback.is_fallback());
        // Same value, different provenance.
        assert_eq!(
            parsed.into_inner().recommendations,
            fallback.into_inner().recommendations
        );
    }
}
