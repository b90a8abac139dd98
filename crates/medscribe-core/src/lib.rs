//! MedScribe Core Library
//!
//! Turns a doctor–patient transcript into a structured clinical record by
//! aggregating signals from external models.
//!
//! # Architecture
//!
//! ```text
//! Audio → Transcription → ┬→ Person NER ──────┐
//!                         ├→ Biomedical NER ──┤
//!                         ├→ Sentiment ───────┼→ Synthesis ─→ ClinicalRecord
//!                         └→ Summarizer ──────┘     │
//!                                                   ├─ Medical_Summary
//!                                                   ├─ Sentiment_Analysis
//!                                                   └─ SOAP_Note
//! ```
//!
//! # Core Principle
//!
//! **Synthesis is deterministic.** The models are probabilistic; everything
//! after them is a stateless rule-based transform with sentinel defaults
//! instead of errors.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Entity, ClinicalSummary, SoapNote, etc.)
//! - [`synthesis`]: Normalization, aggregation and composition stages
//! - [`collaborators`]: Traits for the external taggers, classifier, summarizer, transcriber
//! - [`pipeline`]: Concurrent collaborator fan-out feeding the synthesizer
//! - [`policy`]: Sentinels, blacklists, keywords and boilerplate
//! - [`export`]: JSON export with metadata

pub mod collaborators;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod policy;
pub mod synthesis;

// Re-export commonly used types
pub use collaborators::{
    BiomedicalEntityTagger, Collaborator, ExtractiveSummarizer, PersonEntityTagger, SentimentClassifier,
    SignalError, SignalResult, SpeechTranscriber,
};
pub use export::RecordExport;
pub use models::{
    ClinicalFields, ClinicalRecord, ClinicalSummary, Entity, EntityLabel, PersonMention, Sentiment,
    SentimentResult, SentimentScore, SoapNote,
};
pub use pipeline::{SynthesisError, SynthesisPipeline, SynthesisResult};
pub use policy::SynthesisPolicy;
pub use synthesis::{Signals, Synthesizer};
