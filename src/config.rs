//! Configuration types.

use std::time::Duration;

use crate::drafter::types::Locale;
use crate::error::ConfigError;

pub const ENV_LOCALE: &str = "REPLY_DRAFTER_LOCALE";
pub const ENV_DELAY_MS: &str = "REPLY_DRAFTER_DELAY_MS";
pub const ENV_HISTORY_LIMIT: &str = "REPLY_DRAFTER_HISTORY_LIMIT";

/// Drafter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrafterConfig {
    /// Keyword and template tables to use.
    pub locale: Locale,
    /// Artificial pause before a draft is shown. Zero disables it.
    pub processing_delay: Duration,
    /// Maximum history entries kept; oldest are dropped first. `None` keeps all.
    pub history_limit: Option<usize>,
}

impl Default for DrafterConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            processing_delay: Duration::ZERO,
            history_limit: None,
        }
    }
}

impl DrafterConfig {
    /// Load from `REPLY_DRAFTER_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(ENV_LOCALE) {
            config.locale = raw.parse::<Locale>().map_err(|message| ConfigError::InvalidValue {
                key: ENV_LOCALE.to_string(),
                message,
            })?;
        }

        if let Some(raw) = get(ENV_DELAY_MS) {
            let ms: u64 = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: ENV_DELAY_MS.to_string(),
                message: format!("{raw:?}: {e}"),
            })?;
            config.processing_delay = Duration::from_millis(ms);
        }

        if let Some(raw) = get(ENV_HISTORY_LIMIT) {
            let limit: usize = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: ENV_HISTORY_LIMIT.to_string(),
                message: format!("{raw:?}: {e}"),
            })?;
            if limit == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_HISTORY_LIMIT.to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
            config.history_limit = Some(limit);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DrafterConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DrafterConfig::default());
        assert_eq!(config.processing_delay, Duration::ZERO);
        assert!(config.history_limit.is_none());
    }

    #[test]
    fn reads_all_values() {
        let config = DrafterConfig::from_lookup(lookup(&[
            (ENV_LOCALE, "fr"),
            (ENV_DELAY_MS, "1500"),
            (ENV_HISTORY_LIMIT, "20"),
        ]))
        .unwrap();
        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(config.processing_delay, Duration::from_millis(1500));
        assert_eq!(config.history_limit, Some(20));
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = DrafterConfig::from_lookup(lookup(&[(ENV_LOCALE, "  "), (ENV_DELAY_MS, "")]))
            .unwrap();
        assert_eq!(config, DrafterConfig::default());
    }

    #[test]
    fn rejects_bad_locale() {
        let err = DrafterConfig::from_lookup(lookup(&[(ENV_LOCALE, "klingon")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, .. } => assert_eq!(key, ENV_LOCALE),
        }
    }

    #[test]
    fn rejects_bad_delay() {
        let err = DrafterConfig::from_lookup(lookup(&[(ENV_DELAY_MS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_DELAY_MS));
    }

    #[test]
    fn rejects_zero_history_limit() {
        assert!(DrafterConfig::from_lookup(lookup(&[(ENV_HISTORY_LIMIT, "0")])).is_err());
    }
}
