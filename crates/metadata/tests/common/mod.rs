#![allow(dead_code)]

use std::sync::Mutex;

use tmdb_addon_core::MediaKind;
use tmdb_addon_metadata::MetadataError;
use tmdb_addon_metadata::models::{TmdbDetail, TmdbFindResults, TmdbItem, TmdbPage};
use tmdb_addon_metadata::provider::MetadataProvider;

/// In-memory provider recording every call it receives.
///
/// A `None` response makes the matching call fail as an upstream error.
#[derive(Default)]
pub struct FakeProvider {
    pub calls: Mutex<Vec<String>>,
    pub list: Option<TmdbPage>,
    pub detail: Option<TmdbDetail>,
    pub similar: Option<TmdbPage>,
    pub find: Option<TmdbFindResults>,
}

impl FakeProvider {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn respond<T: Clone>(value: &Option<T>) -> Result<T, MetadataError> {
    value
        .clone()
        .ok_or_else(|| MetadataError::Provider("TMDB returned 503 Service Unavailable".into()))
}

pub fn item(id: u64, title: &str) -> TmdbItem {
    TmdbItem {
        id,
        title: Some(title.into()),
        name: Some(title.into()),
        ..Default::default()
    }
}

pub fn page(items: Vec<TmdbItem>) -> TmdbPage {
    TmdbPage {
        page: 1,
        total_pages: 1,
        total_results: items.len() as u32,
        results: items,
    }
}

#[async_trait::async_trait]
impl MetadataProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn discover_popular(
        &self,
        kind: MediaKind,
        page: u32,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError> {
        self.record(format!(
            "discover:{}:{page}:{}",
            kind.provider_kind(),
            language.unwrap_or("-")
        ));
        respond(&self.list)
    }

    async fn trending(
        &self,
        kind: MediaKind,
        page: u32,
        _language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError> {
        self.record(format!("trending:{}:{page}", kind.provider_kind()));
        respond(&self.list)
    }

    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
        _language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError> {
        self.record(format!("search:{}:{query}:{page}", kind.provider_kind()));
        respond(&self.list)
    }

    async fn details(
        &self,
        kind: MediaKind,
        provider_id: &str,
        _language: Option<&str>,
    ) -> Result<TmdbDetail, MetadataError> {
        self.record(format!("details:{}:{provider_id}", kind.provider_kind()));
        respond(&self.detail)
    }

    async fn similar(
        &self,
        kind: MediaKind,
        provider_id: &str,
        _language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError> {
        self.record(format!("similar:{}:{provider_id}", kind.provider_kind()));
        respond(&self.similar)
    }

    async fn find_by_imdb_id(
        &self,
        imdb_id: &str,
        _language: Option<&str>,
    ) -> Result<TmdbFindResults, MetadataError> {
        self.record(format!("find:{imdb_id}"));
        respond(&self.find)
    }
}
