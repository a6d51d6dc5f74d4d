//! In-memory review session: the current draft plus a history list.

pub mod draft;
pub mod history;

pub use draft::{ApprovedDraft, Draft, DraftSession};
pub use history::{History, HistoryEntry};
