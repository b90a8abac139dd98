//! Entity models produced by the external taggers.

use serde::{Deserialize, Serialize};

/// Label used by general-purpose NER for person names.
pub const PERSON_LABEL: &str = "PERSON";

/// Biomedical entity category.
///
/// Tagger labels outside the clinical set deserialize to [`EntityLabel::Other`]
/// and are skipped during aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    #[serde(rename = "Sign_symptom")]
    SignSymptom,
    #[serde(rename = "Disease_disorder")]
    DiseaseDisorder,
    #[serde(rename = "Medication")]
    Medication,
    #[serde(rename = "Therapeutic_procedure")]
    TherapeuticProcedure,
    #[serde(rename = "Diagnostic_procedure")]
    DiagnosticProcedure,
    #[serde(other)]
    Other,
}

impl EntityLabel {
    /// Map a raw tagger label (e.g. `"Sign_symptom"`) to a category.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Sign_symptom" => Self::SignSymptom,
            "Disease_disorder" => Self::DiseaseDisorder,
            "Medication" => Self::Medication,
            "Therapeutic_procedure" => Self::TherapeuticProcedure,
            "Diagnostic_procedure" => Self::DiagnosticProcedure,
            _ => Self::Other,
        }
    }

    /// The clinical field this label feeds, if any.
    pub fn field(&self) -> Option<ClinicalField> {
        match self {
            Self::SignSymptom => Some(ClinicalField::Symptoms),
            Self::DiseaseDisorder => Some(ClinicalField::Diagnosis),
            Self::Medication | Self::TherapeuticProcedure | Self::DiagnosticProcedure => {
                Some(ClinicalField::Treatment)
            }
            Self::Other => None,
        }
    }
}

/// Summary bucket an entity is routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClinicalField {
    Symptoms,
    Diagnosis,
    Treatment,
}

/// A span labelled by the biomedical tagger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    /// Biomedical category
    pub label: EntityLabel,
    /// Surface text as emitted by the tagger (may contain sub-word markers)
    pub surface_text: String,
    /// Tagger confidence (0.0 - 1.0); carried through, never thresholded
    pub score: f64,
}

impl Entity {
    pub fn new(label: EntityLabel, surface_text: impl Into<String>, score: f64) -> Self {
        Self {
            label,
            surface_text: surface_text.into(),
            score,
        }
    }
}

/// A mention emitted by the general-purpose entity recognizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonMention {
    /// Mention text
    pub text: String,
    /// Recognizer label (only `PERSON` mentions are considered)
    pub label: String,
}

impl PersonMention {
    /// Create a `PERSON` mention.
    pub fn person(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: PERSON_LABEL.to_string(),
        }
    }

    pub fn is_person(&self) -> bool {
        self.label == PERSON_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_tag() {
        assert_eq!(EntityLabel::from_tag("Sign_symptom"), EntityLabel::SignSymptom);
        assert_eq!(EntityLabel::from_tag("Medication"), EntityLabel::Medication);
        assert_eq!(EntityLabel::from_tag("Age"), EntityLabel::Other);
        assert_eq!(EntityLabel::from_tag("sign_symptom"), EntityLabel::Other);
    }

    #[test]
    fn test_label_routing() {
        assert_eq!(EntityLabel::SignSymptom.field(), Some(ClinicalField::Symptoms));
        assert_eq!(EntityLabel::DiseaseDisorder.field(), Some(ClinicalField::Diagnosis));
        assert_eq!(EntityLabel::DiagnosticProcedure.field(), Some(ClinicalField::Treatment));
        assert_eq!(EntityLabel::Other.field(), None);
    }

    #[test]
    fn test_unknown_label_deserializes_to_other() {
        let entity: Entity =
            serde_json::from_str(r#"{"label":"Biological_structure","surface_text":"head","score":0.9}"#)
                .unwrap();
        assert_eq!(entity.label, EntityLabel::Other);

        let entity: Entity =
            serde_json::from_str(r#"{"label":"Disease_disorder","surface_text":"migraine","score":0.8}"#)
                .unwrap();
        assert_eq!(entity.label, EntityLabel::DiseaseDisorder);
    }
}
