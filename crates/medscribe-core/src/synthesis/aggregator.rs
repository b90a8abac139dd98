//! Routes biomedical entities into the Symptoms / Diagnosis / Treatment buckets.
//!
//! Routing:
//! - `Sign_symptom` → Symptoms
//! - `Disease_disorder` → Diagnosis
//! - `Medication`, `Therapeutic_procedure`, `Diagnostic_procedure` → Treatment
//!
//! Tagger scores are carried but never thresholded.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{ClinicalField, ClinicalFields, Entity};
use crate::policy::SynthesisPolicy;

use super::TokenNormalizer;

/// Aggregator for biomedical entities.
pub struct ClinicalFieldAggregator<'a> {
    policy: &'a SynthesisPolicy,
    normalizer: TokenNormalizer,
}

impl<'a> ClinicalFieldAggregator<'a> {
    pub fn new(policy: &'a SynthesisPolicy) -> Self {
        Self {
            policy,
            normalizer: TokenNormalizer::new(),
        }
    }

    /// Bucket, deduplicate and sort the entities.
    ///
    /// Diagnosis falls back to the pending sentinel when nothing was routed to it.
    pub fn aggregate(&self, entities: &[Entity]) -> ClinicalFields {
        let mut symptoms = BTreeSet::new();
        let mut diagnosis = BTreeSet::new();
        let mut treatment = BTreeSet::new();
        let mut dropped = 0usize;

        for entity in entities {
            let Some(field) = entity.label.field() else {
                continue;
            };
            let Some(term) = self
                .normalizer
                .normalize_term(&entity.surface_text, self.policy.min_term_chars)
            else {
                dropped += 1;
                continue;
            };

            match field {
                ClinicalField::Symptoms => symptoms.insert(term),
                ClinicalField::Diagnosis => diagnosis.insert(term),
                ClinicalField::Treatment => treatment.insert(term),
            };
        }

        debug!(
            entities = entities.len(),
            dropped,
            symptoms = symptoms.len(),
            diagnosis = diagnosis.len(),
            treatment = treatment.len(),
            "Aggregated clinical fields"
        );

        let mut diagnosis: Vec<String> = diagnosis.into_iter().collect();
        if diagnosis.is_empty() {
            diagnosis.push(self.policy.pending_diagnosis.clone());
        }

        ClinicalFields {
            symptoms: symptoms.into_iter().collect(),
            diagnosis,
            treatment: treatment.into_iter().collect(),
        }
    }
}
