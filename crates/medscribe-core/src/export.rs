//! Record export with metadata.

use serde::{Deserialize, Serialize};

use crate::models::ClinicalRecord;

/// Current export format version.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// A clinical record wrapped with export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordExport {
    /// Export metadata
    pub metadata: ExportMetadata,
    /// The analysis output
    pub record: ClinicalRecord,
}

/// Record export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Export format version
    pub format_version: String,
    /// Unique export ID
    pub export_id: String,
    /// Export timestamp (RFC 3339)
    pub exported_at: String,
    /// Exporting system identifier
    pub system_id: Option<String>,
}

impl RecordExport {
    /// Wrap a record, stamping it with a fresh ID and the current time.
    pub fn new(record: ClinicalRecord, system_id: Option<String>) -> Self {
        Self {
            metadata: ExportMetadata {
                format_version: EXPORT_FORMAT_VERSION.to_string(),
                export_id: uuid::Uuid::new_v4().to_string(),
                exported_at: chrono::Utc::now().to_rfc3339(),
                system_id,
            },
            record,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a previously exported document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
