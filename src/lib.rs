//! Reply Drafter — keyword-based email classification and templated reply drafts.

pub mod config;
pub mod drafter;
pub mod error;
pub mod session;
pub mod shell;
