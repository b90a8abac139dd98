//! SOAP note composition.

use crate::models::{Assessment, ClinicalSummary, Objective, Plan, SoapNote, Subjective};
use crate::policy::SynthesisPolicy;

/// Separator used when flattening summary lists into note fields.
pub const FIELD_SEPARATOR: &str = ", ";

/// Builds the SOAP note from the summary and the extractive history.
pub struct SoapComposer<'a> {
    policy: &'a SynthesisPolicy,
}

impl<'a> SoapComposer<'a> {
    pub fn new(policy: &'a SynthesisPolicy) -> Self {
        Self { policy }
    }

    /// Compose the note. Objective fields come from the policy, not the transcript.
    pub fn compose(&self, _full_text: &str, summary: &ClinicalSummary, extractive_history: &str) -> SoapNote {
        SoapNote {
            subjective: Subjective {
                chief_complaint: summary.symptoms.join(FIELD_SEPARATOR),
                history_of_present_illness: extractive_history.to_string(),
            },
            objective: Objective {
                physical_exam: self.policy.physical_exam.clone(),
                observations: self.policy.observations.clone(),
            },
            assessment: Assessment {
                diagnosis: summary.diagnosis.join(FIELD_SEPARATOR),
                severity: self.policy.severity.clone(),
            },
            plan: Plan {
                treatment: summary.treatment.join(FIELD_SEPARATOR),
                follow_up: summary.prognosis.clone(),
            },
        }
    }
}
