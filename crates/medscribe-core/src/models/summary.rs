//! Medical summary models.

use serde::{Deserialize, Serialize};

/// Symptoms, diagnosis and treatment buckets after aggregation.
///
/// Each bucket is deduplicated and sorted ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClinicalFields {
    pub symptoms: Vec<String>,
    pub diagnosis: Vec<String>,
    pub treatment: Vec<String>,
}

/// The `Medical_Summary` section of a clinical record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClinicalSummary {
    #[serde(rename = "Patient_Name")]
    pub patient_name: String,
    #[serde(rename = "Symptoms")]
    pub symptoms: Vec<String>,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: Vec<String>,
    #[serde(rename = "Treatment")]
    pub treatment: Vec<String>,
    #[serde(rename = "Prognosis")]
    pub prognosis: String,
}

impl ClinicalSummary {
    /// Assemble a summary from aggregated fields and the resolved name/prognosis.
    pub fn new(patient_name: String, fields: ClinicalFields, prognosis: String) -> Self {
        Self {
            patient_name,
            symptoms: fields.symptoms,
            diagnosis: fields.diagnosis,
            treatment: fields.treatment,
            prognosis,
        }
    }
}
