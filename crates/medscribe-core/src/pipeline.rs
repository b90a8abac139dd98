//! Transcript analysis pipeline.
//!
//! ```text
//!                 ┌──────────── text ────────────┐
//!                 │          │          │        │
//!                 ▼          ▼          ▼        ▼
//!            Person NER  Biomed NER  Sentiment  Summarizer     (concurrent)
//!                 │          │       (512 ch)    │
//!                 └──────────┴────┬─────┴────────┘
//!                                 ▼
//!                            Synthesizer                        (sequential)
//!                                 │
//!                                 ▼
//!          {Medical_Summary, Sentiment_Analysis, SOAP_Note}
//! ```

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::collaborators::{
    BiomedicalEntityTagger, Collaborator, ExtractiveSummarizer, PersonEntityTagger, SentimentClassifier,
    SignalError, SignalResult, SpeechTranscriber,
};
use crate::models::ClinicalRecord;
use crate::policy::SynthesisPolicy;
use crate::synthesis::{truncate_chars, Signals, Synthesizer};

/// Pipeline errors.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("{collaborator} failed: {source}")]
    Collaborator {
        collaborator: Collaborator,
        #[source]
        source: SignalError,
    },

    #[error("No {0} configured")]
    MissingCollaborator(Collaborator),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// Orchestrates the collaborators and the synthesis stages.
///
/// Holds no per-call state, so one pipeline can serve concurrent analyses.
#[derive(Clone)]
pub struct SynthesisPipeline {
    person_tagger: Arc<dyn PersonEntityTagger>,
    biomedical_tagger: Arc<dyn BiomedicalEntityTagger>,
    sentiment: Arc<dyn SentimentClassifier>,
    summarizer: Arc<dyn ExtractiveSummarizer>,
    transcriber: Option<Arc<dyn SpeechTranscriber>>,
    synthesizer: Synthesizer,
}

impl SynthesisPipeline {
    /// Create a pipeline with the default policy.
    pub fn new(
        person_tagger: Arc<dyn PersonEntityTagger>,
        biomedical_tagger: Arc<dyn BiomedicalEntityTagger>,
        sentiment: Arc<dyn SentimentClassifier>,
        summarizer: Arc<dyn ExtractiveSummarizer>,
    ) -> Self {
        Self {
            person_tagger,
            biomedical_tagger,
            sentiment,
            summarizer,
            transcriber: None,
            synthesizer: Synthesizer::default(),
        }
    }

    pub fn with_policy(mut self, policy: SynthesisPolicy) -> Self {
        self.synthesizer = Synthesizer::new(policy);
        self
    }

    pub fn with_transcriber(mut self, transcriber: Arc<dyn SpeechTranscriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    pub fn policy(&self) -> &SynthesisPolicy {
        self.synthesizer.policy()
    }

    /// Analyze a transcript.
    ///
    /// The four collaborators run concurrently; the first failure aborts the
    /// analysis and no partial record is produced.
    pub async fn analyze(&self, text: &str) -> SynthesisResult<ClinicalRecord> {
        let policy = self.synthesizer.policy();
        info!(chars = text.chars().count(), "Analyzing transcript");

        let sentiment_input = truncate_chars(text, policy.sentiment_char_limit);
        let (persons, entities, sentiment, history) = tokio::try_join!(
            call(Collaborator::PersonTagger, self.person_tagger.tag_persons(text)),
            call(Collaborator::BiomedicalTagger, self.biomedical_tagger.tag_entities(text)),
            call(Collaborator::SentimentClassifier, self.sentiment.classify(sentiment_input)),
            call(
                Collaborator::Summarizer,
                self.summarizer.summarize(text, policy.history_sentences)
            ),
        )?;

        debug!(
            persons = persons.len(),
            entities = entities.len(),
            sentiment = %sentiment.label,
            "Collected signals"
        );

        let record = self
            .synthesizer
            .synthesize(text, &Signals::new(persons, entities, sentiment, history));

        info!(
            symptoms = record.medical_summary.symptoms.len(),
            treatment = record.medical_summary.treatment.len(),
            "Analysis complete"
        );

        Ok(record)
    }

    /// Transcribe audio and analyze the resulting transcript.
    pub async fn analyze_audio(&self, audio: &[u8]) -> SynthesisResult<ClinicalRecord> {
        let transcriber = self
            .transcriber
            .as_ref()
            .ok_or(SynthesisError::MissingCollaborator(Collaborator::Transcriber))?;

        debug!(audio_size = audio.len(), "Transcribing audio");
        let text = call(Collaborator::Transcriber, transcriber.transcribe(audio)).await?;

        self.analyze(&text).await
    }
}

async fn call<T>(
    collaborator: Collaborator,
    fut: impl Future<Output = SignalResult<T>>,
) -> SynthesisResult<T> {
    fut.await.map_err(|source| {
        warn!(%collaborator, error = %source, "Collaborator failed");
        SynthesisError::Collaborator { collaborator, source }
    })
}
