//! Sentiment models.

use serde::{Deserialize, Serialize};

/// Label the binary classifier emits for negative text.
pub const NEGATIVE_LABEL: &str = "NEGATIVE";

/// Raw classifier output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentScore {
    /// `POSITIVE` or `NEGATIVE`
    pub label: String,
    /// Classifier confidence (0.0 - 1.0)
    pub score: f64,
}

/// Patient sentiment as reported in the record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sentiment {
    Anxious,
    Reassured,
}

/// The `Sentiment_Analysis` section of a clinical record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentResult {
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Intent")]
    pub intent: String,
}
