//! Per-install settings carried in the URL.
//!
//! Clients embed the settings as the first path segment
//! (`/language=fr-FR/manifest.json`) or, on the similar route, as the
//! `catalogChoices` query parameter. Two encodings are accepted:
//! `key=value` pairs joined by `|`, or a JSON object.

use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub language: Option<String>,
}

impl UserConfig {
    /// Unparsable input yields the default config.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }

        if raw.starts_with('{') {
            return match serde_json::from_str::<Self>(raw) {
                Ok(config) => config.normalized(),
                Err(e) => {
                    debug!(error = %e, "ignoring malformed config segment");
                    Self::default()
                }
            };
        }

        let mut config = Self::default();
        for pair in raw.split('|') {
            if let Some((key, value)) = pair.split_once('=') {
                if key.trim() == "language" {
                    config.language = Some(value.trim().to_string());
                }
            }
        }
        config.normalized()
    }

    pub fn from_segment(segment: Option<&str>) -> Self {
        segment.map(Self::parse).unwrap_or_default()
    }

    fn normalized(mut self) -> Self {
        self.language = self.language.filter(|l| !l.is_empty());
        self
    }
}
