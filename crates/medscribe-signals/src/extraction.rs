//! Parsing of raw model output into core signal types.
//!
//! Accepts the JSON shapes the usual model servers emit:
//! - token classification with `aggregation_strategy="simple"`:
//!   `[{"entity_group": "Sign_symptom", "word": "headache", "score": 0.99, ...}]`
//! - text classification: `[{"label": "NEGATIVE", "score": 0.98}]`
//! - spaCy-style entity lists: `[{"text": "Janet Jones", "label": "PERSON"}]`

use medscribe_core::models::{Entity, EntityLabel, PersonMention, SentimentScore};
use medscribe_core::{SignalError, SignalResult};
use serde::{Deserialize, Serialize};

/// A span from an aggregated token-classification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub entity_group: String,
    pub word: String,
    pub score: f64,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

impl From<TaggedSpan> for Entity {
    fn from(span: TaggedSpan) -> Self {
        Entity {
            label: EntityLabel::from_tag(&span.entity_group),
            surface_text: span.word,
            score: span.score,
        }
    }
}

/// Locate the outermost JSON array in a response that may carry extra text.
fn json_array_slice(response: &str) -> SignalResult<&str> {
    let start = response
        .find('[')
        .ok_or_else(|| SignalError::InvalidFormat("No JSON array found in response".into()))?;
    let end = response
        .rfind(']')
        .ok_or_else(|| SignalError::InvalidFormat("No closing bracket found in response".into()))?;
    if end < start {
        return Err(SignalError::InvalidFormat("Unbalanced JSON array in response".into()));
    }
    Ok(&response[start..=end])
}

/// Parse biomedical tagger output into entities, in emission order.
pub fn parse_token_classification(response: &str) -> SignalResult<Vec<Entity>> {
    let spans: Vec<TaggedSpan> = serde_json::from_str(json_array_slice(response)?)?;
    Ok(spans.into_iter().map(Entity::from).collect())
}

/// Parse classifier output; the first (highest ranked) result is used.
pub fn parse_sentiment_output(response: &str) -> SignalResult<SentimentScore> {
    let results: Vec<SentimentScore> = serde_json::from_str(json_array_slice(response)?)?;
    results
        .into_iter()
        .next()
        .ok_or_else(|| SignalError::InvalidFormat("Empty classification result".into()))
}

/// Parse general recognizer output. Non-PERSON mentions are kept; the
/// resolver ignores them.
pub fn parse_person_entities(response: &str) -> SignalResult<Vec<PersonMention>> {
    Ok(serde_json::from_str(json_array_slice(response)?)?)
}
