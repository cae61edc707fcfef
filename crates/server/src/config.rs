//! Process configuration read from the environment at startup.

use thiserror::Error;
use tmdb_addon_metadata::tmdb::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE, TmdbConfig};

use crate::cache::CachePolicy;

pub const DEFAULT_BIND: &str = "0.0.0.0:7000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub tmdb: TmdbConfig,
    pub cache: CachePolicy,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("TMDB_API_KEY").ok_or(ConfigError::Missing("TMDB_API_KEY"))?;

        let cache = match get("ADDON_CACHE_HEADERS").as_deref() {
            None => CachePolicy::default(),
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "on" => CachePolicy::default(),
                "0" | "false" | "off" => CachePolicy::disabled(),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "ADDON_CACHE_HEADERS",
                        value: v.to_string(),
                    });
                }
            },
        };

        Ok(Self {
            bind: get("ADDON_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            tmdb: TmdbConfig {
                api_key,
                base_url: get("TMDB_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                language: get("TMDB_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            },
            cache,
        })
    }
}
