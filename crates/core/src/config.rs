//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services, so
//! request handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_LOOKUP_DELAY, DEFAULT_LOOKUP_URL};
use crate::{ConfigError, ConfigResult};
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    lookup_url: String,
    lookup_delay: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `lookup_url` is the base URL of the lookup API (without the `/lookup` path).
    pub fn new(lookup_url: String, lookup_delay: Duration) -> ConfigResult<Self> {
        let lookup_url = normalise_lookup_url(&lookup_url)?;
        Ok(Self {
            lookup_url,
            lookup_delay,
        })
    }

    pub fn lookup_url(&self) -> &str {
        &self.lookup_url
    }

    pub fn lookup_delay(&self) -> Duration {
        self.lookup_delay
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_URL.to_owned(),
            lookup_delay: DEFAULT_LOOKUP_DELAY,
        }
    }
}

fn normalise_lookup_url(value: &str) -> ConfigResult<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidInput(format!(
            "lookup URL must start with http:// or https://, got {value:?}"
        )));
    }
    Ok(trimmed.to_owned())
}

/// Parse the lookup delay (milliseconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default delay.
pub fn lookup_delay_from_env_value(value: Option<String>) -> ConfigResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_LOOKUP_DELAY),
        Some(v) => v.parse::<u64>().map(Duration::from_millis).map_err(|_| {
            ConfigError::InvalidInput(format!(
                "lookup delay must be a non-negative number of milliseconds, got {v:?}"
            ))
        }),
    }
}

/// Parse the lookup base URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default URL.
pub fn lookup_url_from_env_value(value: Option<String>) -> ConfigResult<String> {
    match value.filter(|v| !v.trim().is_empty()) {
        None => Ok(DEFAULT_LOOKUP_URL.to_owned()),
        Some(v) => normalise_lookup_url(&v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_defaults_when_unset_or_blank() {
        assert_eq!(lookup_delay_from_env_value(None).unwrap(), DEFAULT_LOOKUP_DELAY);
        assert_eq!(
            lookup_delay_from_env_value(Some("  ".into())).unwrap(),
            DEFAULT_LOOKUP_DELAY
        );
    }

    #[test]
    fn delay_parses_milliseconds() {
        assert_eq!(
            lookup_delay_from_env_value(Some("0".into())).unwrap(),
            Duration::ZERO
        );
        assert_eq!(
            lookup_delay_from_env_value(Some(" 750 ".into())).unwrap(),
            Duration::from_millis(750)
        );
    }

    #[test]
    fn delay_rejects_negative_and_garbage() {
        for bad in ["-1", "fast", "1.5"] {
            let err = lookup_delay_from_env_value(Some(bad.into())).expect_err("should reject");
            assert!(matches!(err, ConfigError::InvalidInput(msg) if msg.contains("milliseconds")));
        }
    }

    #[test]
    fn url_strips_trailing_slash() {
        assert_eq!(
            lookup_url_from_env_value(Some("http://localhost:8080/".into())).unwrap(),
            "http://localhost:8080"
        );
        assert_eq!(lookup_url_from_env_value(None).unwrap(), DEFAULT_LOOKUP_URL);
    }

    #[test]
    fn url_rejects_missing_scheme() {
        let err = lookup_url_from_env_value(Some("localhost:3000".into()))
            .expect_err("should reject missing scheme");
        assert!(matches!(err, ConfigError::InvalidInput(msg) if msg.contains("http://")));
    }

    #[test]
    fn config_new_normalises_url() {
        let cfg = CoreConfig::new("https://lookup.example/".into(), Duration::ZERO).unwrap();
        assert_eq!(cfg.lookup_url(), "https://lookup.example");
        assert_eq!(cfg.lookup_delay(), Duration::ZERO);
    }
}
