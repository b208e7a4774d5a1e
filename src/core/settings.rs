//! Client-visible waitlist settings
//!
//! The server renders these as JSON into the HTML shell; the browser reads
//! them back at startup. Anything that fails to parse falls back to the
//! defaults, which reproduce the pre-launch behavior (simulated submissions).

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// `id` of the `<script type="application/json">` element carrying the settings
pub const SETTINGS_ELEMENT_ID: &str = "waitlist-settings";

pub const DEFAULT_ENDPOINT: &str = "/api/waitlist";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 800;

/// How waitlist submissions leave the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    /// Fixed delay, always succeeds
    #[default]
    #[display("simulated")]
    Simulated,
    /// Real `POST` to the configured endpoint
    #[display("http")]
    Http,
}

impl FromStr for SubmitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(SubmitMode::Simulated),
            "http" => Ok(SubmitMode::Http),
            other => Err(format!("unknown waitlist mode: {}", other)),
        }
    }
}

/// Settings shared from server to browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistSettings {
    pub mode: SubmitMode,
    pub endpoint: String,
    pub timeout_ms: u64,
    pub simulated_delay_ms: u64,
}

impl Default for WaitlistSettings {
    fn default() -> Self {
        Self {
            mode: SubmitMode::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
        }
    }
}

impl WaitlistSettings {
    /// Serialize for embedding in the HTML shell.
    ///
    /// `<` is escaped so an endpoint value can never close the script element.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace('<', "\\u003c")
    }

    /// Parse settings from the shell; malformed input yields the defaults.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            leptos::logging::warn!("invalid waitlist settings, using defaults: {e}");
            Self::default()
        })
    }

    /// Settings for the running client.
    ///
    /// In the browser they come from the shell element; elsewhere (and when the
    /// element is missing) the defaults are used.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let text = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
                .and_then(|el| el.text_content());
            if let Some(text) = text {
                return Self::from_json(&text);
            }
        }

        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WaitlistSettings::default();
        assert_eq!(settings.mode, SubmitMode::Simulated);
        assert_eq!(settings.endpoint, "/api/waitlist");
        assert_eq!(settings.timeout_ms, 10_000);
        assert_eq!(settings.simulated_delay_ms, 800);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = WaitlistSettings {
            mode: SubmitMode::Http,
            endpoint: "https://api.simpleauth.com/waitlist".to_string(),
            timeout_ms: 3_000,
            simulated_delay_ms: 0,
        };

        assert_eq!(WaitlistSettings::from_json(&settings.to_json()), settings);
    }

    #[test]
    fn test_json_uses_lowercase_mode() {
        let json = WaitlistSettings::default().to_json();
        assert!(json.contains("\"mode\":\"simulated\""));
    }

    #[test]
    fn test_json_escapes_angle_bracket() {
        let settings = WaitlistSettings {
            endpoint: "/x</script><script>alert(1)".to_string(),
            ..WaitlistSettings::default()
        };

        let json = settings.to_json();
        assert!(!json.contains('<'));
        assert_eq!(WaitlistSettings::from_json(&json), settings);
    }

    #[test]
    fn test_from_json_partial_fills_defaults() {
        let settings = WaitlistSettings::from_json(r#"{"mode":"http"}"#);
        assert_eq!(settings.mode, SubmitMode::Http);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_from_json_malformed_is_default() {
        assert_eq!(
            WaitlistSettings::from_json("not json"),
            WaitlistSettings::default()
        );
        assert_eq!(
            WaitlistSettings::from_json(r#"{"mode":"carrier-pigeon"}"#),
            WaitlistSettings::default()
        );
    }

    #[test]
    fn test_load_outside_browser_is_default() {
        assert_eq!(WaitlistSettings::load(), WaitlistSettings::default());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("simulated".parse::<SubmitMode>(), Ok(SubmitMode::Simulated));
        assert_eq!(" HTTP ".parse::<SubmitMode>(), Ok(SubmitMode::Http));
        assert!("ftp".parse::<SubmitMode>().is_err());
        assert_eq!(SubmitMode::Http.to_string(), "http");
    }

    #[test]
    fn test_mode_display_parses_back() {
        for mode in [SubmitMode::Simulated, SubmitMode::Http] {
            assert_eq!(mode.to_string().parse::<SubmitMode>(), Ok(mode));
        }
    }
}
