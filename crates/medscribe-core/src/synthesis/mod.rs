//! Clinical-information synthesis.
//!
//! Pipeline: aggregate entities → resolve name → extract prognosis →
//! map sentiment → compose SOAP note
//!
//! Every stage is a pure function of its inputs and the policy.

mod aggregator;
mod normalizer;
mod person;
mod prognosis;
mod sentiment;
mod soap;

pub use aggregator::*;
pub use normalizer::*;
pub use person::*;
pub use prognosis::*;
pub use sentiment::*;
pub use soap::*;

use tracing::debug;

use crate::models::{ClinicalRecord, ClinicalSummary, Entity, PersonMention, SentimentScore};
use crate::policy::SynthesisPolicy;

/// Raw collaborator outputs for one transcript.
#[derive(Debug, Clone, Default)]
pub struct Signals {
    pub persons: Vec<PersonMention>,
    pub entities: Vec<Entity>,
    /// Raw classifier label (`POSITIVE` / `NEGATIVE`)
    pub sentiment_label: String,
    /// Extractive summary used as the history of present illness
    pub history: String,
}

impl Signals {
    pub fn new(
        persons: Vec<PersonMention>,
        entities: Vec<Entity>,
        sentiment: SentimentScore,
        history: String,
    ) -> Self {
        Self {
            persons,
            entities,
            sentiment_label: sentiment.label,
            history,
        }
    }
}

/// Runs the synthesis stages over already-computed signals.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    policy: SynthesisPolicy,
}

impl Synthesizer {
    pub fn new(policy: SynthesisPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SynthesisPolicy {
        &self.policy
    }

    /// Build the medical summary (fields, patient name, prognosis).
    pub fn summarize(&self, text: &str, persons: &[PersonMention], entities: &[Entity]) -> ClinicalSummary {
        let fields = ClinicalFieldAggregator::new(&self.policy).aggregate(entities);
        let patient_name = PersonResolver::new(&self.policy).resolve(persons, text);
        let prognosis = PrognosisExtractor::new(&self.policy).extract(text);

        debug!(patient_known = patient_name != self.policy.unknown_patient, "Summarized transcript");

        ClinicalSummary::new(patient_name, fields, prognosis)
    }

    /// Build the full record.
    pub fn synthesize(&self, text: &str, signals: &Signals) -> ClinicalRecord {
        let medical_summary = self.summarize(text, &signals.persons, &signals.entities);
        let sentiment_analysis = SentimentMapper::new().map(&signals.sentiment_label);
        let soap_note = SoapComposer::new(&self.policy).compose(text, &medical_summary, &signals.history);

        ClinicalRecord {
            medical_summary,
            sentiment_analysis,
            soap_note,
        }
    }
}
