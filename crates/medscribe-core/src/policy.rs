//! Placeholder business rules used by the synthesis stages.
//!
//! Everything here is a named constant or an overridable policy field, so
//! sentinels and boilerplate can be swapped without touching the stages.

use serde::{Deserialize, Serialize};

/// Returned when no patient name can be derived.
pub const UNKNOWN_PATIENT: &str = "Unknown";

/// Diagnosis used when the tagger reports no disease/disorder.
pub const PENDING_DIAGNOSIS: &str = "Pending Evaluation";

/// Prognosis used when no trailing sentence mentions an outlook.
pub const DEFAULT_PROGNOSIS: &str = "Follow-up required";

/// Role and greeting words the general recognizer mislabels as PERSON.
pub const NAME_BLACKLIST: &[&str] = &[
    "doctor",
    "physician",
    "morning",
    "afternoon",
    "hello",
    "dr.",
    "mr.",
    "ms.",
];

/// Words indicating a prognosis statement.
pub const PROGNOSIS_KEYWORDS: &[&str] = &["recover", "month", "week", "days", "prognosis", "expect"];

/// Number of trailing period-separated fragments scanned for a prognosis.
pub const PROGNOSIS_WINDOW: usize = 4;

/// Normalized terms shorter than this (in characters) are treated as noise.
pub const MIN_TERM_CHARS: usize = 3;

/// Character ceiling of the sentiment classifier input.
pub const SENTIMENT_CHAR_LIMIT: usize = 512;

/// Sentences requested from the extractive summarizer for the HPI.
pub const HISTORY_SENTENCES: usize = 2;

pub const PHYSICAL_EXAM_TEXT: &str = "Vital signs stable.";
pub const OBSERVATIONS_TEXT: &str = "Patient is alert and oriented.";
pub const DEFAULT_SEVERITY: &str = "Moderate";

/// Tunable rules for a synthesis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynthesisPolicy {
    /// Lower-case words never accepted as a patient name
    pub name_blacklist: Vec<String>,
    /// Names accepted when found verbatim in the transcript (e.g. today's roster)
    pub known_patients: Vec<String>,
    /// Lower-case prognosis keywords
    pub prognosis_keywords: Vec<String>,
    pub prognosis_window: usize,
    pub min_term_chars: usize,
    pub sentiment_char_limit: usize,
    pub history_sentences: usize,
    pub unknown_patient: String,
    pub pending_diagnosis: String,
    pub default_prognosis: String,
    pub physical_exam: String,
    pub observations: String,
    pub severity: String,
}

impl Default for SynthesisPolicy {
    fn default() -> Self {
        Self {
            name_blacklist: NAME_BLACKLIST.iter().map(|w| w.to_string()).collect(),
            known_patients: Vec::new(),
            prognosis_keywords: PROGNOSIS_KEYWORDS.iter().map(|w| w.to_string()).collect(),
            prognosis_window: PROGNOSIS_WINDOW,
            min_term_chars: MIN_TERM_CHARS,
            sentiment_char_limit: SENTIMENT_CHAR_LIMIT,
            history_sentences: HISTORY_SENTENCES,
            unknown_patient: UNKNOWN_PATIENT.to_string(),
            pending_diagnosis: PENDING_DIAGNOSIS.to_string(),
            default_prognosis: DEFAULT_PROGNOSIS.to_string(),
            physical_exam: PHYSICAL_EXAM_TEXT.to_string(),
            observations: OBSERVATIONS_TEXT.to_string(),
            severity: DEFAULT_SEVERITY.to_string(),
        }
    }
}

impl SynthesisPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names to fall back on when the recognizer finds no usable PERSON.
    /// Blank names are skipped.
    pub fn with_known_patients<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_patients.extend(
            names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.trim().is_empty()),
        );
        self
    }

    /// Add a word to the name blacklist (stored lower-cased). Blank words are ignored.
    pub fn with_blacklisted(mut self, word: &str) -> Self {
        if !word.trim().is_empty() {
            self.name_blacklist.push(word.to_lowercase());
        }
        self
    }

    /// Add a prognosis keyword (stored lower-cased). Blank keywords are ignored,
    /// since they would match every fragment.
    pub fn with_prognosis_keyword(mut self, keyword: &str) -> Self {
        if !keyword.trim().is_empty() {
            self.prognosis_keywords.push(keyword.to_lowercase());
        }
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn with_history_sentences(mut self, sentences: usize) -> Self {
        self.history_sentences = sentences;
        self
    }
}
