use tmdb_addon_core::MediaKind;

use crate::MetadataError;
use crate::models::{TmdbDetail, TmdbFindResults, TmdbPage};

/// Upstream metadata API the addon proxies.
///
/// `language` overrides the provider's configured default when set.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Titles of `kind` ordered by the provider's popularity ranking.
    async fn discover_popular(
        &self,
        kind: MediaKind,
        page: u32,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError>;

    /// Titles of `kind` trending this week.
    async fn trending(
        &self,
        kind: MediaKind,
        page: u32,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError>;

    /// Titles of `kind` matching free-text `query`, in the provider's relevance order.
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError>;

    /// Full record with videos, credits and external ids appended.
    async fn details(
        &self,
        kind: MediaKind,
        provider_id: &str,
        language: Option<&str>,
    ) -> Result<TmdbDetail, MetadataError>;

    /// First page of titles the provider considers similar.
    async fn similar(
        &self,
        kind: MediaKind,
        provider_id: &str,
        language: Option<&str>,
    ) -> Result<TmdbPage, MetadataError>;

    /// Translate an IMDb id into provider ids.
    async fn find_by_imdb_id(
        &self,
        imdb_id: &str,
        language: Option<&str>,
    ) -> Result<TmdbFindResults, MetadataError>;
}
