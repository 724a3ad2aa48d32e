//! Session configuration
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file. Invalid values are replaced by defaults and kept on the
//! config so they can be logged once a subscriber is installed.

use std::str::FromStr;
use tracing::Level;

/// Enables rejection of blank form fields
pub const STRICT_VALIDATION_VAR: &str = "PLANNER_STRICT_VALIDATION";

/// Maximum log level for the fmt subscriber
pub const LOG_LEVEL_VAR: &str = "PLANNER_LOG_LEVEL";

/// An environment value that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSetting {
    pub var: &'static str,
    pub value: String,
}

/// Settings for one planning session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Reject blank name, path or template instead of accepting them
    pub strict_validation: bool,
    pub log_level: Level,
    rejected: Vec<RejectedSetting>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            strict_validation: false,
            log_level: Level::INFO,
            rejected: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Load settings from the environment
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    ///
    /// # Example
    /// ```
    /// use project_planner::config::SessionConfig;
    ///
    /// let config = SessionConfig::from_lookup(|key| match key {
    ///     "PLANNER_STRICT_VALIDATION" => Some("true".to_string()),
    ///     _ => None,
    /// });
    ///
    /// assert!(config.strict_validation);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(STRICT_VALIDATION_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.strict_validation = flag,
                None => config.reject(STRICT_VALIDATION_VAR, raw),
            }
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            match Level::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => config.reject(LOG_LEVEL_VAR, raw),
            }
        }

        config
    }

    /// Returns the environment values that were ignored in favour of defaults
    pub fn rejected(&self) -> &[RejectedSetting] {
        &self.rejected
    }

    fn reject(&mut self, var: &'static str, value: String) {
        self.rejected.push(RejectedSetting { var, value });
    }

    pub fn strict(mut self, strict_validation: bool) -> Self {
        self.strict_validation = strict_validation;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = SessionConfig::from_lookup(|_| None);

        assert_eq!(config, SessionConfig::default());
        assert!(!config.strict_validation);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_strict_flag_variants() {
        for raw in ["1", "true", "YES", " on "] {
            let config = SessionConfig::from_lookup(lookup_from(&[(STRICT_VALIDATION_VAR, raw)]));
            assert!(config.strict_validation, "{raw:?} should enable strict mode");
        }
        for raw in ["0", "false", "No", "off"] {
            let config = SessionConfig::from_lookup(lookup_from(&[(STRICT_VALIDATION_VAR, raw)]));
            assert!(!config.strict_validation, "{raw:?} should disable strict mode");
        }
    }

    #[test]
    fn invalid_flag_falls_back_to_default() {
        let config =
            SessionConfig::from_lookup(lookup_from(&[(STRICT_VALIDATION_VAR, "sometimes")]));

        assert!(!config.strict_validation);
        assert_eq!(
            config.rejected(),
            &[RejectedSetting {
                var: STRICT_VALIDATION_VAR,
                value: "sometimes".to_string(),
            }]
        );
    }

    #[test]
    fn reads_log_level() {
        let config = SessionConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "debug")]));

        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn invalid_log_level_falls_back_to_info() {
        let config = SessionConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "loud")]));

        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.rejected().len(), 1);
        assert_eq!(config.rejected()[0].var, LOG_LEVEL_VAR);
        assert_eq!(config.rejected()[0].value, "loud");
    }

    #[test]
    fn valid_values_reject_nothing() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            (STRICT_VALIDATION_VAR, "on"),
            (LOG_LEVEL_VAR, "warn"),
        ]));

        assert!(config.rejected().is_empty());
        assert!(config.strict_validation);
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn strict_builder_overrides_flag() {
        let config = SessionConfig::default().strict(true);

        assert!(config.strict_validation);
    }
}
