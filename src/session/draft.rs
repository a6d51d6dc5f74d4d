//! Draft review session — generate, edit, approve, reset.
//!
//! Holds at most one draft at a time. Approval is simulated: the approved
//! text is handed back to the caller and nothing is sent.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DrafterConfig;
use crate::drafter::ReplyDrafter;
use crate::drafter::types::{Category, EmailDraftRequest, GeneratedReply};
use crate::error::DraftError;

use super::history::{History, HistoryEntry};

/// The draft currently under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    /// The email being answered.
    pub request: EmailDraftRequest,
    /// Reply as generated.
    pub reply: GeneratedReply,
    /// Reply body as currently edited. Starts as `reply.body`.
    pub text: String,
    /// When the draft was generated.
    pub created_at: DateTime<Utc>,
}

impl Draft {
    /// Has the body been changed since generation?
    pub fn is_edited(&self) -> bool {
        self.text != self.reply.body
    }
}

/// What the user approved. Would be handed to a mail client; here it is only reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovedDraft {
    pub subject: String,
    /// Final body, including any edits.
    pub body: String,
    pub category: Category,
    /// Original sender, the would-be recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    pub approved_at: DateTime<Utc>,
}

/// One user's in-memory session.
#[derive(Debug)]
pub struct DraftSession {
    drafter: ReplyDrafter,
    processing_delay: Duration,
    history: History,
    current: Option<Draft>,
}

impl DraftSession {
    /// Create a session from configuration.
    pub fn new(config: &DrafterConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => History::with_limit(limit),
            None => History::new(),
        };
        Self {
            drafter: ReplyDrafter::new(config.locale),
            processing_delay: config.processing_delay,
            history,
            current: None,
        }
    }

    /// Drafter used by this session.
    pub fn drafter(&self) -> &ReplyDrafter {
        &self.drafter
    }

    /// Generate a draft for `request`, replacing any current draft.
    ///
    /// Rejects a blank body. Waits `processing_delay` first when non-zero.
    pub async fn generate(&mut self, request: EmailDraftRequest) -> Result<&Draft, DraftError> {
        if request.is_blank() {
            return Err(DraftError::EmptyBody);
        }

        if !self.processing_delay.is_zero() {
            debug!(delay = ?self.processing_delay, "Simulating processing delay");
            tokio::time::sleep(self.processing_delay).await;
        }

        let reply = self.drafter.generate_reply(&request);
        let placeholders = self.drafter.templates();

        let sender = request
            .sender
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(placeholders.unknown_sender);
        let subject = if request.subject.trim().is_empty() {
            placeholders.no_subject
        } else {
            request.subject.as_str()
        };
        self.history.record(HistoryEntry::new(
            sender,
            subject,
            request.body.as_str(),
            reply.category,
        ));

        info!(
            category = %reply.category,
            tone = %reply.tone,
            sender = %sender,
            "Draft generated"
        );

        let draft = Draft {
            text: reply.body.clone(),
            request,
            reply,
            created_at: Utc::now(),
        };
        Ok(&*self.current.insert(draft))
    }

    /// The draft under review, if any.
    pub fn current(&self) -> Option<&Draft> {
        self.current.as_ref()
    }

    /// Replace the draft body text.
    pub fn edit(&mut self, text: impl Into<String>) -> Result<&Draft, DraftError> {
        let draft = self.current.as_mut().ok_or(DraftError::NoDraft)?;
        draft.text = text.into();
        debug!(edited = draft.is_edited(), "Draft text updated");
        Ok(&*draft)
    }

    /// Approve the current draft and clear the form. Nothing is sent.
    pub fn approve(&mut self) -> Result<ApprovedDraft, DraftError> {
        let draft = self.current.take().ok_or(DraftError::NoDraft)?;

        info!(
            category = %draft.reply.category,
            edited = draft.is_edited(),
            "Draft approved (simulated, not sent)"
        );

        Ok(ApprovedDraft {
            subject: draft.reply.subject,
            body: draft.text,
            category: draft.reply.category,
            recipient: draft.request.sender,
            approved_at: Utc::now(),
        })
    }

    /// Discard the current draft. History is kept.
    pub fn reset(&mut self) -> Option<Draft> {
        let discarded = self.current.take();
        if discarded.is_some() {
            debug!("Draft discarded");
        }
        discarded
    }

    /// Processed emails, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }
}
