//! Capabilities the pipeline consumes: taggers, classifier, summarizer, transcriber.
//!
//! Implementations wrap models or services outside this crate. Each call is a
//! pure function of its input; any timeout or retry policy belongs to the
//! implementation.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Entity, PersonMention, SentimentScore};

/// Collaborator-side errors.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Model inference error: {0}")]
    Inference(String),

    #[error("Transcription error: {0}")]
    Transcription(String),
}

pub type SignalResult<T> = Result<T, SignalError>;

/// Identifies a collaborator in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    PersonTagger,
    BiomedicalTagger,
    SentimentClassifier,
    Summarizer,
    Transcriber,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PersonTagger => "person tagger",
            Self::BiomedicalTagger => "biomedical tagger",
            Self::SentimentClassifier => "sentiment classifier",
            Self::Summarizer => "extractive summarizer",
            Self::Transcriber => "speech transcriber",
        };
        f.write_str(name)
    }
}

/// General-purpose NER; only `PERSON` mentions are used.
#[async_trait]
pub trait PersonEntityTagger: Send + Sync {
    async fn tag_persons(&self, text: &str) -> SignalResult<Vec<PersonMention>>;
}

/// Biomedical NER with per-span confidence.
#[async_trait]
pub trait BiomedicalEntityTagger: Send + Sync {
    async fn tag_entities(&self, text: &str) -> SignalResult<Vec<Entity>>;
}

/// Binary sentiment classifier.
///
/// Callers pass at most the first 512 characters of the transcript.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> SignalResult<SentimentScore>;
}

/// Selects the `sentences` most salient sentences of `text`.
#[async_trait]
pub trait ExtractiveSummarizer: Send + Sync {
    async fn summarize(&self, text: &str, sentences: usize) -> SignalResult<String>;
}

/// Speech-to-text.
#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> SignalResult<String>;
}
