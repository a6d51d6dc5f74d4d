//! Session history — append-only, newest-first record of processed emails.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::drafter::types::Category;

/// One processed email. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry ID.
    pub id: Uuid,
    /// Sender as entered, or the unknown-sender placeholder.
    pub sender: String,
    /// Subject as entered, or the no-subject placeholder.
    pub subject: String,
    /// Original email body.
    pub body: String,
    /// Category the email was classified as.
    pub category: Category,
    /// When the draft was generated.
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
            category,
            created_at: Utc::now(),
        }
    }
}

/// In-memory history. Dropped with the session.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: Option<usize>,
}

impl History {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` entries, dropping the oldest.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Record a new entry at the front.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if let Some(limit) = self.limit {
            self.entries.truncate(limit);
        }
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
