//! Keyword rules for classification and intent detection.
//!
//! Matching is a case-insensitive substring test:
//! - no tokenization or stemming
//! - no word boundaries, so "unimportant" matches "important"
//!
//! Categories are checked in priority order: urgent → professional → personal.

use regex::Regex;
use tracing::debug;

use super::types::{Category, IntentFlags, Locale};

/// Static keyword lists for one locale.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    /// Any match classifies as urgent.
    pub urgent: &'static [&'static str],
    /// Any match (without an urgent match) classifies as professional.
    pub professional: &'static [&'static str],
    /// Polite-request phrases.
    pub request: &'static [&'static str],
    /// Dissatisfaction phrases.
    pub complaint: &'static [&'static str],
}

pub static ENGLISH_KEYWORDS: KeywordTable = KeywordTable {
    urgent: &["urgent", "asap", "immediate", "quickly", "important"],
    professional: &["meeting", "project", "contract", "invoice", "quote", "company"],
    request: &["could you", "would you", "please"],
    complaint: &["problem", "error", "disappointed", "unsatisfied"],
};

pub static FRENCH_KEYWORDS: KeywordTable = KeywordTable {
    urgent: &["urgent", "asap", "immédiat", "rapidement", "important"],
    professional: &[
        "réunion",
        "meeting",
        "projet",
        "contrat",
        "facture",
        "devis",
        "société",
        "entreprise",
    ],
    request: &["pouvez-vous", "pourriez-vous", "merci de", "please"],
    complaint: &["problème", "erreur", "déçu", "insatisfait"],
};

impl KeywordTable {
    /// Built-in table for a locale.
    pub fn for_locale(locale: Locale) -> &'static KeywordTable {
        match locale {
            Locale::En => &ENGLISH_KEYWORDS,
            Locale::Fr => &FRENCH_KEYWORDS,
        }
    }
}

/// A keyword list compiled into one case-insensitive alternation.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    /// Compiled regex, `None` for an empty list (never matches).
    regex: Option<Regex>,
}

impl KeywordSet {
    /// Compile a keyword list. Keywords are matched literally.
    pub fn new(keywords: &[&str]) -> Result<Self, regex::Error> {
        if keywords.is_empty() {
            return Ok(Self { regex: None });
        }
        let alternation = keywords
            .iter()
            .map(|kw| regex::escape(kw))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!("(?i)(?:{alternation})"))?;
        Ok(Self { regex: Some(regex) })
    }

    /// Does any keyword occur anywhere in `text`?
    pub fn matches(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(text))
    }
}

/// Compiled keyword rules: the classifier and the intent detector.
#[derive(Debug, Clone)]
pub struct KeywordRules {
    urgent: KeywordSet,
    professional: KeywordSet,
    request: KeywordSet,
    complaint: KeywordSet,
}

impl KeywordRules {
    /// Compile an arbitrary keyword table.
    pub fn from_table(table: &KeywordTable) -> Result<Self, regex::Error> {
        Ok(Self {
            urgent: KeywordSet::new(table.urgent)?,
            professional: KeywordSet::new(table.professional)?,
            request: KeywordSet::new(table.request)?,
            complaint: KeywordSet::new(table.complaint)?,
        })
    }

    /// Rules for a built-in locale.
    pub fn for_locale(locale: Locale) -> Self {
        // Built-in tables are escaped literals and always compile.
        Self::from_table(KeywordTable::for_locale(locale)).unwrap()
    }

    /// Classify an email. Body and subject are searched separately.
    ///
    /// Total: always returns exactly one category.
    pub fn classify(&self, body: &str, subject: &str) -> Category {
        let either = |set: &KeywordSet| set.matches(body) || set.matches(subject);

        let category = if either(&self.urgent) {
            Category::Urgent
        } else if either(&self.professional) {
            Category::Professional
        } else {
            Category::Personal
        };

        debug!(category = %category, "Email classified");
        category
    }

    /// Read intent signals from the body. The subject is not consulted.
    pub fn detect_intent(&self, body: &str) -> IntentFlags {
        IntentFlags {
            is_question: body.contains('?'),
            is_request: self.request.matches(body),
            is_complaint: self.complaint.matches(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> KeywordRules {
        KeywordRules::for_locale(Locale::En)
    }

    #[test]
    fn urgent_beats_professional() {
        let rules = english();
        assert_eq!(
            rules.classify("This is an urgent contract issue", ""),
            Category::Urgent
        );
    }

    #[test]
    fn professional_without_urgency() {
        let rules = english();
        let body = "Can we schedule a meeting next week?";
        assert_eq!(rules.classify(body, ""), Category::Professional);

        let intent = rules.detect_intent(body);
        assert!(intent.is_question);
        assert!(!intent.is_request);
        assert!(!intent.is_complaint);
    }

    #[test]
    fn personal_is_the_default() {
        let rules = english();
        assert_eq!(
            rules.classify("Thanks for dinner last night!", ""),
            Category::Personal
        );
    }

    #[test]
    fn subject_alone_can_classify() {
        let rules = english();
        assert_eq!(rules.classify("See attached.", "ASAP please"), Category::Urgent);
        assert_eq!(
            rules.classify("See attached.", "Project Update"),
            Category::Professional
        );
    }

    #[test]
    fn no_match_across_body_subject_boundary() {
        let rules = english();
        // "as" + "ap" only forms "asap" if the fields were glued together.
        assert_eq!(rules.classify("as", "ap"), Category::Personal);
    }

    #[test]
    fn matching_ignores_case() {
        let rules = english();
        assert_eq!(
            rules.classify("URGENT deadline", ""),
            rules.classify("urgent deadline", "")
        );
        assert_eq!(rules.classify("URGENT deadline", ""), Category::Urgent);
        assert_eq!(rules.classify("", "InVoIcE attached"), Category::Professional);
    }

    #[test]
    fn keywords_match_inside_longer_words() {
        let rules = english();
        // No word boundaries: "unimportant" still contains "important".
        assert_eq!(
            rules.classify("This is totally unimportant", ""),
            Category::Urgent
        );
        assert_eq!(rules.classify("", "Companywide picnic"), Category::Professional);
    }

    #[test]
    fn classification_is_repeatable() {
        let rules = english();
        let body = "Quick question about the quote";
        assert_eq!(rules.classify(body, "x"), rules.classify(body, "x"));
    }

    #[test]
    fn blank_input_is_personal() {
        let rules = english();
        assert_eq!(rules.classify("", ""), Category::Personal);
        assert_eq!(rules.detect_intent(""), IntentFlags::default());
    }

    #[test]
    fn intent_flags_are_independent() {
        let rules = english();
        let intent = rules
            .detect_intent("There is a problem with the invoice, could you fix it?");
        assert!(intent.is_question);
        assert!(intent.is_request);
        assert!(intent.is_complaint);
    }

    #[test]
    fn intent_ignores_case() {
        let rules = english();
        assert!(rules.detect_intent("PLEASE send it").is_request);
        assert!(rules.detect_intent("I am Disappointed").is_complaint);
    }

    #[test]
    fn french_rules() {
        let rules = KeywordRules::for_locale(Locale::Fr);
        let body = "Pouvez-vous envoyer la facture ?";
        assert_eq!(rules.classify(body, ""), Category::Professional);
        let intent = rules.detect_intent(body);
        assert!(intent.is_request);
        assert!(intent.is_question);

        assert_eq!(rules.classify("C'est IMMÉDIAT", ""), Category::Urgent);
        assert!(rules.detect_intent("Je suis déçu").is_complaint);
    }

    #[test]
    fn english_rules_do_not_know_french_keywords() {
        let rules = english();
        assert_eq!(rules.classify("Voici la facture", ""), Category::Personal);
    }

    #[test]
    fn custom_table() {
        let table = KeywordTable {
            urgent: &["now!"],
            professional: &[],
            request: &["pls"],
            complaint: &[],
        };
        let rules = KeywordRules::from_table(&table).unwrap();
        // Regex metacharacters in keywords are literal.
        assert_eq!(rules.classify("do it NOW!", ""), Category::Urgent);
        assert_eq!(rules.classify("now", ""), Category::Personal);
        assert!(rules.detect_intent("pls help").is_request);
        assert!(!rules.detect_intent("problem").is_complaint);
    }

    #[test]
    fn empty_keyword_set_never_matches() {
        let set = KeywordSet::new(&[]).unwrap();
        assert!(!set.matches(""));
        assert!(!set.matches("anything"));
    }
}
