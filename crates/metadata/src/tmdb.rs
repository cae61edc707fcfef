//! TMDB (The Movie Database) provider client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use serde::de::DeserializeOwned;
use tmdb_addon_core::MediaKind;
use tracing::debug;

use crate::MetadataError;
use crate::models::{TmdbDetail, TmdbFindResults, TmdbPage};
use crate::provider::MetadataProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// TMDB has no pages past 500.
const MAX_PAGE: u32 = 500;

/// Connection settings for [`TmdbClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        language: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<T, MetadataError> {
        let language = language.unwrap_or(self.config.language.as_str());
        let mut all_params = vec![
            ("api_key", self.config.api_key.as_str()),
            ("language", language),
        ];
        all_params.extend_from_slice(params);

        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, language, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MetadataError::NotFound);
        }

        if !resp.status().is_success() {
            return Err(MetadataError::Provider(format!(
                "TMDB returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn discover_popular(
        &self,
        kind: MediaKind,
        page: u32,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError> {
        let page = page.clamp(1, MAX_PAGE).to_string();
        self.get_json(
            &format!("/discover/{}", kind.provider_kind()),
            language,
            &[("sort_by", "popularity.desc"), ("page", page.as_str())],
        )
        .await
    }

    async fn trending(
        &self,
        kind: MediaKind,
        page: u32,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError> {
        let page = page.clamp(1, MAX_PAGE).to_string();
        self.get_json(
            &format!("/trending/{}/week", kind.provider_kind()),
            language,
            &[("page", page.as_str())],
        )
        .await
    }

    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError> {
        let page = page.clamp(1, MAX_PAGE).to_string();
        self.get_json(
            &format!("/search/{}", kind.provider_kind()),
            language,
            &[("query", query), ("page", page.as_str())],
        )
        .await
    }

    async fn details(
        &self,
        kind: MediaKind,
        provider_id: &str,
        language: Option<&str>,
    ) -> Result<TmdbDetail, MetadataError> {
        self.get_json(
            &format!("/{}/{provider_id}", kind.provider_kind()),
            language,
            &[("append_to_response", "videos,credits,external_ids")],
        )
        .await
    }

    async fn similar(
        &self,
        kind: MediaKind,
        provider_id: &str,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError> {
        self.get_json(
            &format!("/{}/{provider_id}/similar", kind.provider_kind()),
            language,
            &[("page", "1")],
        )
        .await
    }

    async fn find_by_imdb_id(
        &self,
        imdb_id: &str,
        language: Option<&str>,
    ) -> Result<TmdbFindResults, MetadataError> {
        self.get_json(
            &format!("/find/{imdb_id}"),
            language,
            &[("external_source", "imdb_id")],
        )
        .await
    }
}
