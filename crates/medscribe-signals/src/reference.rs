//! Deterministic collaborators for demos and tests without model weights.

use async_trait::async_trait;
use medscribe_core::models::{Entity, EntityLabel, PersonMention, SentimentScore};
use medscribe_core::{
    BiomedicalEntityTagger, ExtractiveSummarizer, PersonEntityTagger, SentimentClassifier, SignalResult,
    SpeechTranscriber,
};
use tracing::debug;

/// A short consultation used for demos and end-to-end tests.
pub const SAMPLE_TRANSCRIPT: &str = "Physician: Good morning, Ms. Janet Jones. How are you?
Patient: I have a severe headache and nausea. I took Paracetamol but it didn't help.
Physician: It looks like a migraine. I will prescribe Sumatriptan.
Patient: Thank you, I hope to recover in a few days.
";

/// Default lexicon for [`LexiconTagger`].
const DEFAULT_LEXICON: &[(&str, EntityLabel)] = &[
    ("headache", EntityLabel::SignSymptom),
    ("nausea", EntityLabel::SignSymptom),
    ("fever", EntityLabel::SignSymptom),
    ("cough", EntityLabel::SignSymptom),
    ("dizziness", EntityLabel::SignSymptom),
    ("back pain", EntityLabel::SignSymptom),
    ("neck pain", EntityLabel::SignSymptom),
    ("migraine", EntityLabel::DiseaseDisorder),
    ("whiplash", EntityLabel::DiseaseDisorder),
    ("asthma", EntityLabel::DiseaseDisorder),
    ("influenza", EntityLabel::DiseaseDisorder),
    ("paracetamol", EntityLabel::Medication),
    ("ibuprofen", EntityLabel::Medication),
    ("sumatriptan", EntityLabel::Medication),
    ("painkillers", EntityLabel::Medication),
    ("physiotherapy", EntityLabel::TherapeuticProcedure),
    ("x-ray", EntityLabel::DiagnosticProcedure),
    ("blood test", EntityLabel::DiagnosticProcedure),
];

/// Biomedical tagger matching a fixed lexicon, case-insensitively.
///
/// Each lexicon term is reported at most once, at its first occurrence, and
/// results come back in transcript order.
pub struct LexiconTagger {
    lexicon: Vec<(String, EntityLabel)>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON
                .iter()
                .map(|(term, label)| (term.to_string(), *label))
                .collect(),
        }
    }

    /// Add a lexicon term (matched lower-cased).
    pub fn add_term(&mut self, term: &str, label: EntityLabel) {
        self.lexicon.push((term.to_lowercase(), label));
    }

    /// Tag `text` synchronously.
    pub fn tag(&self, text: &str) -> Vec<Entity> {
        let lower = text.to_lowercase();
        let mut found: Vec<(usize, Entity)> = self
            .lexicon
            .iter()
            .filter_map(|(term, label)| {
                let pos = lower.find(term.as_str())?;
                // Fall back to the lexicon form if lower-casing shifted byte offsets
                let surface = text.get(pos..pos + term.len()).unwrap_or(term.as_str());
                Some((pos, Entity::new(*label, surface, 1.0)))
            })
            .collect();
        found.sort_by_key(|(pos, _)| *pos);

        debug!(matches = found.len(), "Lexicon tagging complete");
        found.into_iter().map(|(_, entity)| entity).collect()
    }
}

#[async_trait]
impl BiomedicalEntityTagger for LexiconTagger {
    async fn tag_entities(&self, text: &str) -> SignalResult<Vec<Entity>> {
        Ok(self.tag(text))
    }
}

/// Honorifics after which [`HonorificPersonTagger`] looks for a name.
const HONORIFICS: &[&str] = &["Mr.", "Ms.", "Mrs.", "Miss", "Dr."];

/// Maximum words taken as a name after an honorific.
const MAX_NAME_WORDS: usize = 3;

/// Person tagger taking capitalized words that follow an honorific.
#[derive(Debug, Clone, Copy, Default)]
pub struct HonorificPersonTagger;

impl HonorificPersonTagger {
    pub fn tag(&self, text: &str) -> Vec<PersonMention> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut mentions = Vec::new();

        for (i, word) in words.iter().enumerate() {
            if !HONORIFICS.contains(word) {
                continue;
            }

            let mut name = Vec::new();
            for next in words.iter().skip(i + 1).take(MAX_NAME_WORDS) {
                let bare = next.trim_end_matches(|c: char| c.is_ascii_punctuation());
                if !bare.chars().next().is_some_and(char::is_uppercase) {
                    break;
                }
                name.push(bare);
                if bare.len() != next.len() {
                    break;
                }
            }

            if !name.is_empty() {
                mentions.push(PersonMention::person(name.join(" ")));
            }
        }

        mentions
    }
}

#[async_trait]
impl PersonEntityTagger for HonorificPersonTagger {
    async fn tag_persons(&self, text: &str) -> SignalResult<Vec<PersonMention>> {
        Ok(self.tag(text))
    }
}

const NEGATIVE_CUES: &[&str] = &[
    "pain", "worried", "anxious", "severe", "hurt", "didn't help", "scared", "nausea", "worse",
];
const POSITIVE_CUES: &[&str] = &["better", "thank", "improv", "relief", "recover", "fine"];

/// Sentiment classifier counting cue words.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSentimentClassifier;

impl KeywordSentimentClassifier {
    pub fn classify_text(&self, text: &str) -> SentimentScore {
        let lower = text.to_lowercase();
        let count = |cues: &[&str]| cues.iter().filter(|c| lower.contains(**c)).count();
        let negative = count(NEGATIVE_CUES);
        let positive = count(POSITIVE_CUES);

        let total = negative + positive;
        let score = if total == 0 {
            0.5
        } else {
            0.5 + 0.5 * negative.abs_diff(positive) as f64 / total as f64
        };
        let label = if negative > positive { "NEGATIVE" } else { "POSITIVE" };

        SentimentScore {
            label: label.to_string(),
            score,
        }
    }
}

#[async_trait]
impl SentimentClassifier for KeywordSentimentClassifier {
    async fn classify(&self, text: &str) -> SignalResult<SentimentScore> {
        Ok(self.classify_text(text))
    }
}

/// Extractive summarizer returning the leading sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadSummarizer;

impl LeadSummarizer {
    pub fn lead(&self, text: &str, sentences: usize) -> String {
        text.split_inclusive('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(sentences)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl ExtractiveSummarizer for LeadSummarizer {
    async fn summarize(&self, text: &str, sentences: usize) -> SignalResult<String> {
        Ok(self.lead(text, sentences))
    }
}

/// Transcriber that ignores the audio and returns a fixed transcript.
#[derive(Debug, Clone)]
pub struct FixedTranscriber {
    text: String,
}

impl FixedTranscriber {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl SpeechTranscriber for FixedTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> SignalResult<String> {
        debug!(audio_size = audio.len(), "Returning fixed transcript");
        Ok(self.text.clone())
    }
}
