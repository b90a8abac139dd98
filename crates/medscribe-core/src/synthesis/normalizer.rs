//! Entity surface-text normalizer.
//!
//! Handles:
//! - Sub-word continuation markers left by token merging (`##ache`)
//! - Surrounding whitespace
//! - Capitalization for presentation (`HEADACHE` → `Headache`)

/// Marker the word-piece tokenizer prefixes to continuation fragments.
pub const SUBWORD_MARKER: &str = "##";

/// Normalizer for tagger surface text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenNormalizer;

impl TokenNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Strip every sub-word marker and trim surrounding whitespace.
    pub fn clean(&self, raw: &str) -> String {
        raw.replace(SUBWORD_MARKER, "").trim().to_string()
    }

    /// Title-case the first character and lower-case the rest.
    ///
    /// Digraphs map to their title-case form (`ǆ` → `ǅ`) and characters that
    /// upper-case to several letters keep only the first one upper-cased
    /// (`ß` → `Ss`). Greek letters with iota subscript and `ŉ` still follow the
    /// plain upper-case mapping.
    pub fn capitalize(&self, term: &str) -> String {
        let mut chars = term.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => {
                let mut term = titlecase(first);
                term.push_str(&chars.as_str().to_lowercase());
                term
            }
        }
    }

    /// Clean and capitalize a term, dropping it when shorter than `min_chars`.
    pub fn normalize_term(&self, raw: &str, min_chars: usize) -> Option<String> {
        let term = self.capitalize(&self.clean(raw));
        if term.chars().count() < min_chars {
            None
        } else {
            Some(term)
        }
    }
}

/// Title-case form of a single character.
fn titlecase(c: char) -> String {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}'.to_string(),
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}'.to_string(),
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}'.to_string(),
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}'.to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut title: String = upper.next().into_iter().collect();
            title.extend(upper.flat_map(char::to_lowercase));
            title
        }
    }
}
