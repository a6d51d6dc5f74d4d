//! Error types for the reply drafter.
//!
//! Classification and composition cannot fail. Errors only arise from
//! session misuse, configuration, and terminal I/O.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the draft review session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Email body is empty")]
    EmptyBody,

    #[error("No draft to work on; generate one first")]
    NoDraft,
}

/// Result type alias for the drafter.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_error_converts_to_top_level() {
        let err: Error = DraftError::EmptyBody.into();
        assert!(matches!(err, Error::Draft(DraftError::EmptyBody)));
        assert_eq!(err.to_string(), "Draft error: Email body is empty");
    }

    #[test]
    fn config_error_message_names_key() {
        let err = ConfigError::InvalidValue {
            key: "REPLY_DRAFTER_DELAY_MS".into(),
            message: "not a number".into(),
        };
        assert!(err.to_string().contains("REPLY_DRAFTER_DELAY_MS"));
    }
}
