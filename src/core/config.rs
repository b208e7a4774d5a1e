//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::settings::{
    DEFAULT_ENDPOINT, DEFAULT_SIMULATED_DELAY_MS, DEFAULT_TIMEOUT_MS, SubmitMode, WaitlistSettings,
};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How the browser submits waitlist emails (`WAITLIST_MODE`)
    /// Values: simulated | http
    pub waitlist_mode: SubmitMode,

    /// Endpoint the browser posts to in `http` mode (`WAITLIST_ENDPOINT`)
    /// Example: /api/waitlist or https://api.simpleauth.com/waitlist
    pub waitlist_endpoint: String,

    /// Client-side timeout for the waitlist call (`WAITLIST_TIMEOUT_MS`)
    pub waitlist_timeout_ms: u64,

    /// Artificial latency in `simulated` mode (`WAITLIST_SIMULATED_DELAY_MS`)
    pub simulated_delay_ms: u64,

    /// Whether `POST /api/waitlist` accepts registrations (`WAITLIST_ACCEPTING`)
    pub waitlist_accepting: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let waitlist_mode = match lookup("WAITLIST_MODE") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to simulated", e);
                SubmitMode::Simulated
            }),
            None => SubmitMode::Simulated,
        };

        Self {
            waitlist_mode,
            waitlist_endpoint: lookup("WAITLIST_ENDPOINT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            waitlist_timeout_ms: parse_or(&lookup, "WAITLIST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
            simulated_delay_ms: parse_or(
                &lookup,
                "WAITLIST_SIMULATED_DELAY_MS",
                DEFAULT_SIMULATED_DELAY_MS,
            ),
            waitlist_accepting: parse_bool_or(&lookup, "WAITLIST_ACCEPTING", true),
        }
    }

    /// Check if the browser will make real HTTP calls
    pub fn is_http_mode(&self) -> bool {
        self.waitlist_mode == SubmitMode::Http
    }

    /// Settings handed to the browser through the HTML shell
    pub fn waitlist_settings(&self) -> WaitlistSettings {
        WaitlistSettings {
            mode: self.waitlist_mode,
            endpoint: self.waitlist_endpoint.clone(),
            timeout_ms: self.waitlist_timeout_ms,
            simulated_delay_ms: self.simulated_delay_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{}={:?} is not a number, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_bool_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match lookup(key).as_deref().map(str::trim) {
        Some("1") | Some("true") | Some("yes") | Some("on") => true,
        Some("0") | Some("false") | Some("no") | Some("off") => false,
        Some(other) => {
            tracing::warn!("{}={:?} is not a boolean, using {}", key, other, default);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.waitlist_mode, SubmitMode::Simulated);
        assert_eq!(config.waitlist_endpoint, "/api/waitlist");
        assert_eq!(config.waitlist_timeout_ms, 10_000);
        assert_eq!(config.simulated_delay_ms, 800);
        assert!(config.waitlist_accepting);
        assert!(!config.is_http_mode());
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config_from(&[
            ("WAITLIST_MODE", "http"),
            ("WAITLIST_ENDPOINT", "https://api.simpleauth.com/waitlist"),
            ("WAITLIST_TIMEOUT_MS", "2500"),
            ("WAITLIST_SIMULATED_DELAY_MS", "0"),
            ("WAITLIST_ACCEPTING", "false"),
        ]);

        assert_eq!(config.waitlist_mode, SubmitMode::Http);
        assert_eq!(
            config.waitlist_endpoint,
            "https://api.simpleauth.com/waitlist"
        );
        assert_eq!(config.waitlist_timeout_ms, 2_500);
        assert_eq!(config.simulated_delay_ms, 0);
        assert!(!config.waitlist_accepting);
        assert!(config.is_http_mode());
    }

    #[test]
    fn test_unknown_mode_falls_back_to_simulated() {
        let config = config_from(&[("WAITLIST_MODE", "smoke-signals")]);
        assert_eq!(config.waitlist_mode, SubmitMode::Simulated);
    }

    #[test]
    fn test_invalid_numbers_use_defaults() {
        let config = config_from(&[
            ("WAITLIST_TIMEOUT_MS", "soon"),
            ("WAITLIST_SIMULATED_DELAY_MS", "-5"),
        ]);

        assert_eq!(config.waitlist_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.simulated_delay_ms, DEFAULT_SIMULATED_DELAY_MS);
    }

    #[test]
    fn test_blank_endpoint_uses_default() {
        let config = config_from(&[("WAITLIST_ENDPOINT", "  ")]);
        assert_eq!(config.waitlist_endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_accepting_values() {
        for (raw, expected) in [
            ("1", true),
            ("true", true),
            ("on", true),
            ("0", false),
            ("no", false),
            ("off", false),
            ("maybe", true),
        ] {
            let config = config_from(&[("WAITLIST_ACCEPTING", raw)]);
            assert_eq!(config.waitlist_accepting, expected, "value: {raw}");
        }
    }

    #[test]
    fn test_waitlist_settings() {
        let config = config_from(&[
            ("WAITLIST_MODE", "http"),
            ("WAITLIST_TIMEOUT_MS", "3000"),
        ]);

        let settings = config.waitlist_settings();
        assert_eq!(settings.mode, SubmitMode::Http);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.timeout_ms, 3_000);
        assert_eq!(settings.simulated_delay_ms, DEFAULT_SIMULATED_DELAY_MS);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        let _ = config.is_http_mode();
        let _ = config.waitlist_settings();
    }

    #[test]
    fn test_config_debug() {
        let config = config_from(&[]);
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("waitlist_endpoint"));
    }
}
