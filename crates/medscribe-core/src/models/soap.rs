//! SOAP note models.

use serde::{Deserialize, Serialize};

/// Subjective / Objective / Assessment / Plan note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoapNote {
    #[serde(rename = "Subjective")]
    pub subjective: Subjective,
    #[serde(rename = "Objective")]
    pub objective: Objective,
    #[serde(rename = "Assessment")]
    pub assessment: Assessment,
    #[serde(rename = "Plan")]
    pub plan: Plan,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subjective {
    /// Comma-joined symptoms
    #[serde(rename = "Chief_Complaint")]
    pub chief_complaint: String,
    /// Extractive summary of the transcript
    #[serde(rename = "History_of_Present_Illness")]
    pub history_of_present_illness: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Objective {
    #[serde(rename = "Physical_Exam")]
    pub physical_exam: String,
    #[serde(rename = "Observations")]
    pub observations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assessment {
    #[serde(rename = "Diagnosis")]
    pub diagnosis: String,
    #[serde(rename = "Severity")]
    pub severity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    #[serde(rename = "Treatment")]
    pub treatment: String,
    #[serde(rename = "Follow-Up")]
    pub follow_up: String,
}
