//! Combined analysis record.

use serde::{Deserialize, Serialize};

use super::{ClinicalSummary, SentimentResult, SoapNote};

/// Output of a single transcript analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClinicalRecord {
    #[serde(rename = "Medical_Summary")]
    pub medical_summary: ClinicalSummary,
    #[serde(rename = "Sentiment_Analysis")]
    pub sentiment_analysis: SentimentResult,
    #[serde(rename = "SOAP_Note")]
    pub soap_note: SoapNote,
}

impl ClinicalRecord {
    /// Render the record as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
