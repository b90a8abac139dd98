//! Patient name resolution from general-purpose PERSON mentions.

use crate::models::PersonMention;
use crate::policy::SynthesisPolicy;

/// Picks the patient's name from recognizer output.
pub struct PersonResolver<'a> {
    policy: &'a SynthesisPolicy,
}

impl<'a> PersonResolver<'a> {
    pub fn new(policy: &'a SynthesisPolicy) -> Self {
        Self { policy }
    }

    /// Resolve the patient name.
    ///
    /// The first PERSON mention (in encounter order) that is neither blank nor
    /// a blacklisted role or greeting word wins. Failing that, the first known
    /// patient name appearing verbatim in `full_text` is used, else the unknown
    /// sentinel.
    pub fn resolve(&self, mentions: &[PersonMention], full_text: &str) -> String {
        if let Some(mention) = mentions
            .iter()
            .filter(|m| m.is_person() && !m.text.trim().is_empty())
            .find(|m| !self.is_blacklisted(&m.text))
        {
            return mention.text.clone();
        }

        self.policy
            .known_patients
            .iter()
            .find(|name| !name.trim().is_empty() && full_text.contains(name.as_str()))
            .cloned()
            .unwrap_or_else(|| self.policy.unknown_patient.clone())
    }

    fn is_blacklisted(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.policy.name_blacklist.iter().any(|w| *w == lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blacklist_filtering() {
        let policy = SynthesisPolicy::default();
        let resolver = PersonResolver::new(&policy);

        let mentions = vec![PersonMention::person("Dr."), PersonMention::person("Janet Jones")];
        assert_eq!(resolver.resolve(&mentions, ""), "Janet Jones");
    }

    #[test]
    fn test_first_mention_wins() {
        let policy = SynthesisPolicy::default();
        let resolver = PersonResolver::new(&policy);

        let mentions = vec![
            PersonMention::person("Janet Jones"),
            PersonMention::person("Alan Smith"),
            PersonMention::person("Alan Smith"),
        ];
        assert_eq!(resolver.resolve(&mentions, ""), "Janet Jones");
    }

    #[test]
    fn test_blacklist_is_case_insensitive_exact_match() {
        let policy = SynthesisPolicy::default();
        let resolver = PersonResolver::new(&policy);

        let mentions = vec![PersonMention::person("MORNING"), PersonMention::person("Physician")];
        assert_eq!(resolver.resolve(&mentions, ""), "Unknown");

        // Whole-text match only: a name containing a role word survives
        let mentions = vec![PersonMention::person("Doctor Who")];
        assert_eq!(resolver.resolve(&mentions, ""), "Doctor Who");
    }

    #[test]
    fn test_blank_mentions_skipped() {
        let policy = SynthesisPolicy::default();
        let resolver = PersonResolver::new(&policy);

        let mentions = vec![PersonMention::person(""), PersonMention::person("Janet Jones")];
        assert_eq!(resolver.resolve(&mentions, "x"), "Janet Jones");

        let mentions = vec![PersonMention::person("   "), PersonMention::person("\n")];
        assert_eq!(resolver.resolve(&mentions, "x"), "Unknown");
    }

    #[test]
    fn test_blank_known_patient_ignored() {
        let mut policy = SynthesisPolicy::default();
        policy.known_patients = vec![" ".into(), "Janet Jones".into()];
        let resolver = PersonResolver::new(&policy);

        assert_eq!(resolver.resolve(&[PersonMention::person(" ")], "Hi Janet Jones"), "Janet Jones");
        assert_eq!(resolver.resolve(&[], "Hello there."), "Unknown");
    }

    #[test]
    fn test_non_person_labels_ignored() {
        let policy = SynthesisPolicy::default();
        let resolver = PersonResolver::new(&policy);

        let mentions = vec![PersonMention {
            text: "Monday".into(),
            label: "DATE".into(),
        }];
        assert_eq!(resolver.resolve(&mentions, "See you Monday"), "Unknown");
    }

    #[test]
    fn test_known_patient_fallback() {
        let policy = SynthesisPolicy::default().with_known_patients(["Alan Smith", "Janet Jones"]);
        let resolver = PersonResolver::new(&policy);

        let text = "Physician: Good morning, Ms. Janet Jones.";
        assert_eq!(resolver.resolve(&[PersonMention::person("Morning")], text), "Janet Jones");
        assert_eq!(resolver.resolve(&[], "Hello there."), "Unknown");
    }
}
