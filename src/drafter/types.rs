//! Shared types for reply drafting.

use serde::{Deserialize, Serialize};

// ── Request ─────────────────────────────────────────────────────────

/// An incoming email to draft a reply for.
///
/// Only `body` and `subject` are analyzed. `sender` is carried through
/// to the session history for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraftRequest {
    /// Email body text.
    pub body: String,
    /// Subject line (empty when absent).
    #[serde(default)]
    pub subject: String,
    /// Who sent the email, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

impl EmailDraftRequest {
    /// Create a request with just a body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }

    /// Set the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the sender.
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// True when the body holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

// ── Category ────────────────────────────────────────────────────────

/// Classification result driving template choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Urgent,
    Professional,
    Personal,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Urgent => write!(f, "urgent"),
            Self::Professional => write!(f, "professional"),
            Self::Personal => write!(f, "personal"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urgent" => Ok(Self::Urgent),
            "professional" => Ok(Self::Professional),
            "personal" => Ok(Self::Personal),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

// ── Locale ──────────────────────────────────────────────────────────

/// Which keyword and template tables to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Fr => write!(f, "fr"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "fr" | "french" => Ok(Self::Fr),
            other => Err(format!("Unknown locale: {}", other)),
        }
    }
}

// ── Intent ──────────────────────────────────────────────────────────

/// Independent intent signals read from the body. Not mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentFlags {
    /// Body contains a question mark.
    pub is_question: bool,
    /// Body contains a polite-request phrase.
    pub is_request: bool,
    /// Body contains a dissatisfaction phrase.
    pub is_complaint: bool,
}

// ── Reply ───────────────────────────────────────────────────────────

/// A draft reply for human review. Never sent automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReply {
    /// "Re: " plus the original subject (or a placeholder).
    pub subject: String,
    /// Templated reply text.
    pub body: String,
    /// Short label for the register the draft is written in.
    pub tone: String,
    /// Guidance for the reviewer. Always populated.
    pub remarks: String,
    /// Category the email was classified as.
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builders() {
        let req = EmailDraftRequest::new("Hello")
            .with_subject("Greetings")
            .with_sender("alice@example.com");
        assert_eq!(req.body, "Hello");
        assert_eq!(req.subject, "Greetings");
        assert_eq!(req.sender.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn blank_body_detection() {
        assert!(EmailDraftRequest::new("   \n\t").is_blank());
        assert!(EmailDraftRequest::new("").is_blank());
        assert!(!EmailDraftRequest::new(" hi ").is_blank());
    }

    #[test]
    fn request_deserializes_with_missing_optionals() {
        let req: EmailDraftRequest = serde_json::from_str(r#"{"body": "hi"}"#).unwrap();
        assert_eq!(req.subject, "");
        assert!(req.sender.is_none());
    }

    #[test]
    fn category_display_and_fromstr() {
        assert_eq!(Category::Urgent.to_string(), "urgent");
        assert_eq!(
            "professional".parse::<Category>().unwrap(),
            Category::Professional
        );
        assert!("spam".parse::<Category>().is_err());
    }

    #[test]
    fn locale_parse_is_lenient() {
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!(" english ".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Personal).unwrap();
        assert_eq!(json, "\"personal\"");
    }

    #[test]
    fn reply_serialization() {
        let reply = GeneratedReply {
            subject: "Re: Lunch".into(),
            body: "Sounds great".into(),
            tone: "warm and friendly".into(),
            remarks: "Personal email.".into(),
            category: Category::Personal,
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["category"], "personal");
        assert_eq!(json["subject"], "Re: Lunch");
        assert!(json["remarks"].is_string());
    }
}
