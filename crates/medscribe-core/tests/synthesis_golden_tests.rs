//! Golden and property tests for the synthesis stages.

use medscribe_core::models::{Entity, EntityLabel, PersonMention, Sentiment};
use medscribe_core::policy::SynthesisPolicy;
use medscribe_core::synthesis::{ClinicalFieldAggregator, PersonResolver, PrognosisExtractor, SentimentMapper};
use proptest::prelude::*;

/// Test case for field aggregation.
struct GoldenCase {
    id: &'static str,
    entities: Vec<(EntityLabel, &'static str)>,
    expected_symptoms: Vec<&'static str>,
    expected_diagnosis: Vec<&'static str>,
    expected_treatment: Vec<&'static str>,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "headache-paracetamol",
            entities: vec![
                (EntityLabel::SignSymptom, "headache"),
                (EntityLabel::Medication, "Paracetamol"),
            ],
            expected_symptoms: vec!["Headache"],
            expected_diagnosis: vec!["Pending Evaluation"],
            expected_treatment: vec!["Paracetamol"],
        },
        GoldenCase {
            id: "migraine-consult",
            entities: vec![
                (EntityLabel::SignSymptom, "severe headache"),
                (EntityLabel::SignSymptom, "nausea"),
                (EntityLabel::Medication, "Paracetamol"),
                (EntityLabel::DiseaseDisorder, "migraine"),
                (EntityLabel::Medication, "Sumatriptan"),
            ],
            expected_symptoms: vec!["Nausea", "Severe headache"],
            expected_diagnosis: vec!["Migraine"],
            expected_treatment: vec!["Paracetamol", "Sumatriptan"],
        },
        GoldenCase {
            id: "wordpiece-fragments",
            entities: vec![
                (EntityLabel::SignSymptom, "##ache"),
                (EntityLabel::SignSymptom, "back ##ache"),
                (EntityLabel::Medication, "##en"),
                (EntityLabel::DiseaseDisorder, "whip##lash"),
            ],
            expected_symptoms: vec!["Ache", "Back ache"],
            expected_diagnosis: vec!["Whiplash"],
            expected_treatment: vec![],
        },
        GoldenCase {
            id: "procedures-and-ignored-labels",
            entities: vec![
                (EntityLabel::DiagnosticProcedure, "MRI scan"),
                (EntityLabel::TherapeuticProcedure, "physiotherapy"),
                (EntityLabel::Other, "neck"),
                (EntityLabel::Other, "car accident"),
            ],
            expected_symptoms: vec![],
            expected_diagnosis: vec!["Pending Evaluation"],
            expected_treatment: vec!["Mri scan", "Physiotherapy"],
        },
        GoldenCase {
            id: "case-variants-collapse",
            entities: vec![
                (EntityLabel::DiseaseDisorder, "Asthma"),
                (EntityLabel::DiseaseDisorder, "ASTHMA"),
                (EntityLabel::DiseaseDisorder, " asthma "),
            ],
            expected_symptoms: vec![],
            expected_diagnosis: vec!["Asthma"],
            expected_treatment: vec![],
        },
    ]
}

#[test]
fn test_golden_aggregation() {
    let policy = SynthesisPolicy::default();
    let aggregator = ClinicalFieldAggregator::new(&policy);

    for case in get_golden_cases() {
        let entities: Vec<Entity> = case
            .entities
            .iter()
            .map(|(label, text)| Entity::new(*label, *text, 0.9))
            .collect();

        let fields = aggregator.aggregate(&entities);

        assert_eq!(fields.symptoms, case.expected_symptoms, "Case {}: symptoms", case.id);
        assert_eq!(fields.diagnosis, case.expected_diagnosis, "Case {}: diagnosis", case.id);
        assert_eq!(fields.treatment, case.expected_treatment, "Case {}: treatment", case.id);
    }
}

#[test]
fn test_blacklist_words() {
    let policy = SynthesisPolicy::default();
    let resolver = PersonResolver::new(&policy);

    for word in ["Doctor", "physician", "Morning", "afternoon", "Hello", "Dr.", "MR.", "ms."] {
        let mentions = vec![PersonMention::person(word), PersonMention::person("Janet Jones")];
        assert_eq!(
            resolver.resolve(&mentions, ""),
            "Janet Jones",
            "{} should be filtered",
            word
        );
    }
}

#[test]
fn test_prognosis_window_scenario() {
    let policy = SynthesisPolicy::default();
    let extractor = PrognosisExtractor::new(&policy);

    // Keywords in fragments 0 and 1 sit outside the trailing window.
    let text = "I expect the worst. It has been weeks. The pain is dull. \
                I sleep badly.   I will recover with rest   . Thank you";

    assert_eq!(extractor.extract(text), "I will recover with rest");
}

fn label_strategy() -> impl Strategy<Value = EntityLabel> {
    prop_oneof![
        Just(EntityLabel::SignSymptom),
        Just(EntityLabel::DiseaseDisorder),
        Just(EntityLabel::Medication),
        Just(EntityLabel::TherapeuticProcedure),
        Just(EntityLabel::DiagnosticProcedure),
        Just(EntityLabel::Other),
    ]
}

fn entities_strategy() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec(
        (label_strategy(), "[A-Za-z# ]{0,12}", 0.0f64..1.0)
            .prop_map(|(label, text, score)| Entity::new(label, text, score)),
        0..24,
    )
}

fn is_sorted_unique(items: &[String]) -> bool {
    items.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn prop_buckets_sorted_and_unique(entities in entities_strategy()) {
        let policy = SynthesisPolicy::default();
        let fields = ClinicalFieldAggregator::new(&policy).aggregate(&entities);

        prop_assert!(is_sorted_unique(&fields.symptoms));
        prop_assert!(is_sorted_unique(&fields.diagnosis));
        prop_assert!(is_sorted_unique(&fields.treatment));
        prop_assert!(!fields.diagnosis.is_empty());
        for term in fields.symptoms.iter().chain(&fields.treatment) {
            prop_assert!(term.chars().count() >= 3);
        }
    }

    #[test]
    fn prop_aggregation_idempotent(entities in entities_strategy()) {
        let policy = SynthesisPolicy::default();
        let aggregator = ClinicalFieldAggregator::new(&policy);
        let once = aggregator.aggregate(&entities);

        // Duplicated input collapses to the same buckets
        let doubled: Vec<Entity> = entities.iter().chain(&entities).cloned().collect();
        prop_assert_eq!(&aggregator.aggregate(&doubled), &once);

        // Re-aggregating normalized output is a fixed point
        let refed: Vec<Entity> = once
            .symptoms
            .iter()
            .map(|s| Entity::new(EntityLabel::SignSymptom, s.clone(), 1.0))
            .chain(once.treatment.iter().map(|t| Entity::new(EntityLabel::Medication, t.clone(), 1.0)))
            .collect();
        let twice = aggregator.aggregate(&refed);
        prop_assert_eq!(twice.symptoms, once.symptoms);
        prop_assert_eq!(twice.treatment, once.treatment);
    }

    #[test]
    fn prop_name_and_prognosis_never_empty(
        names in prop::collection::vec("[A-Za-z. \\t]{0,10}", 0..5),
        text in "[A-Za-z .]{0,80}",
    ) {
        let policy = SynthesisPolicy::default();
        let mentions: Vec<PersonMention> = names.into_iter().map(PersonMention::person).collect();

        let name = PersonResolver::new(&policy).resolve(&mentions, &text);
        prop_assert!(!name.trim().is_empty(), "blank name {:?}", name);
        prop_assert!(!PrognosisExtractor::new(&policy).extract(&text).trim().is_empty());
    }

    #[test]
    fn prop_sentiment_mapping_total(label in "[A-Z]{0,10}") {
        let result = SentimentMapper::new().map(&label);
        if label == "NEGATIVE" {
            prop_assert_eq!(result.sentiment, Sentiment::Anxious);
        } else {
            prop_assert_eq!(result.sentiment, Sentiment::Reassured);
        }
    }
}
