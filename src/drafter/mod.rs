//! Rule-based reply drafting.
//!
//! Every email flows through:
//! 1. `KeywordRules::classify()` — urgent / professional / personal
//! 2. `KeywordRules::detect_intent()` — question, request, complaint flags
//! 3. `TemplateTable::compose()` — template selection and fill-in
//!
//! All three steps are pure. Nothing here sends mail.

pub mod composer;
pub mod rules;
pub mod types;

use tracing::debug;

use composer::TemplateTable;
use rules::KeywordRules;
use types::{EmailDraftRequest, GeneratedReply, Locale};

/// Drafts replies for one locale.
#[derive(Debug, Clone)]
pub struct ReplyDrafter {
    locale: Locale,
    rules: KeywordRules,
    templates: &'static TemplateTable,
}

impl ReplyDrafter {
    /// Create a drafter using the built-in tables for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            rules: KeywordRules::for_locale(locale),
            templates: TemplateTable::for_locale(locale),
        }
    }

    /// Locale this drafter was built for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Keyword rules in use.
    pub fn rules(&self) -> &KeywordRules {
        &self.rules
    }

    /// Template table in use.
    pub fn templates(&self) -> &'static TemplateTable {
        self.templates
    }

    /// Classify the email and build a reply draft.
    ///
    /// Never fails. A blank body classifies as personal; callers that want
    /// to reject blank input must check before calling.
    pub fn generate_reply(&self, request: &EmailDraftRequest) -> GeneratedReply {
        let category = self.rules.classify(&request.body, &request.subject);
        let intent = self.rules.detect_intent(&request.body);

        debug!(
            locale = %self.locale,
            category = %category,
            is_question = intent.is_question,
            is_request = intent.is_request,
            is_complaint = intent.is_complaint,
            "Composing reply"
        );

        self.templates.compose(category, intent, &request.subject)
    }
}

impl Default for ReplyDrafter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
