//! Maps the binary classifier label to a clinical sentiment and intent.

use crate::models::{Sentiment, SentimentResult, NEGATIVE_LABEL};

/// Intent reported for anxious patients.
pub const ANXIOUS_INTENT: &str = "Seeking reassurance";

/// Intent reported for reassured patients.
pub const REASSURED_INTENT: &str = "Reporting progress";

#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentMapper;

impl SentimentMapper {
    pub fn new() -> Self {
        Self
    }

    /// `NEGATIVE` maps to anxious; every other label maps to reassured.
    pub fn map(&self, raw_label: &str) -> SentimentResult {
        if raw_label == NEGATIVE_LABEL {
            SentimentResult {
                sentiment: Sentiment::Anxious,
                intent: ANXIOUS_INTENT.to_string(),
            }
        } else {
            SentimentResult {
                sentiment: Sentiment::Reassured,
                intent: REASSURED_INTENT.to_string(),
            }
        }
    }
}

/// First `limit` characters of `text` (characters, not bytes or tokens).
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_is_anxious() {
        let result = SentimentMapper::new().map("NEGATIVE");
        assert_eq!(result.sentiment, Sentiment::Anxious);
        assert_eq!(result.intent, "Seeking reassurance");
    }

    #[test]
    fn test_everything_else_is_reassured() {
        let mapper = SentimentMapper::new();
        for label in ["POSITIVE", "negative", "NEUTRAL", ""] {
            let result = mapper.map(label);
            assert_eq!(result.sentiment, Sentiment::Reassured, "label {label}");
            assert_eq!(result.intent, "Reporting progress");
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 512), "hello");
        assert_eq!(truncate_chars("", 4), "");

        // Multi-byte characters count once each
        assert_eq!(truncate_chars("éééé", 2), "éé");

        let long = "a".repeat(600);
        assert_eq!(truncate_chars(&long, 512).len(), 512);
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(SentimentMapper::new().map("NEGATIVE")).unwrap();
        assert_eq!(json["Sentiment"], "Anxious");
        assert_eq!(json["Intent"], "Seeking reassurance");
    }
}
