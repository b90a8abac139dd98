//! Prognosis extraction from the end of the transcript.
//!
//! Sentences are split on raw periods, so abbreviations and decimals
//! produce extra fragments. The window below counts those fragments too.

use crate::policy::SynthesisPolicy;

/// Scans trailing fragments for prognosis keywords.
pub struct PrognosisExtractor<'a> {
    policy: &'a SynthesisPolicy,
}

impl<'a> PrognosisExtractor<'a> {
    pub fn new(policy: &'a SynthesisPolicy) -> Self {
        Self { policy }
    }

    /// Return the first trailing fragment mentioning an outlook, trimmed.
    pub fn extract(&self, full_text: &str) -> String {
        self.trailing_window(full_text)
            .into_iter()
            .find(|fragment| self.mentions_prognosis(fragment))
            .map(|fragment| fragment.trim().to_string())
            .unwrap_or_else(|| self.policy.default_prognosis.clone())
    }

    /// The last `prognosis_window` fragments, or all of them when there are
    /// not more than that.
    pub fn trailing_window<'t>(&self, full_text: &'t str) -> Vec<&'t str> {
        let fragments: Vec<&str> = full_text.split('.').collect();
        let start = fragments.len().saturating_sub(self.policy.prognosis_window);
        fragments.into_iter().skip(start).collect()
    }

    fn mentions_prognosis(&self, fragment: &str) -> bool {
        let lower = fragment.to_lowercase();
        self.policy
            .prognosis_keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .any(|k| lower.contains(k.as_str()))
    }
}
