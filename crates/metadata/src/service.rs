//! Request-level operations behind the catalog, meta and similar routes.

use std::sync::Arc;

use tmdb_addon_core::{MediaKind, MetaDetail, MetaItem};
use tracing::debug;

use crate::MetadataError;
use crate::mapper::{map_catalog, map_detail};
use crate::provider::MetadataProvider;
use crate::resolver::{ResolvedId, resolve};

/// Items per provider page; `skip` offsets are converted with it.
pub const PAGE_SIZE: u32 = 20;

/// Catalogs published in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Popular,
    Trending,
    Search,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [Self::Popular, Self::Trending, Self::Search];

    pub fn id(self) -> &'static str {
        match self {
            Self::Popular => "tmdb.popular",
            Self::Trending => "tmdb.trending",
            Self::Search => "tmdb.search",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::Trending => "Trending",
            Self::Search => "Search",
        }
    }

    /// Whether the catalog only answers with a `search` extra.
    pub fn requires_search(self) -> bool {
        matches!(self, Self::Search)
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// Extra arguments of a catalog request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub skip: u32,
    pub search: Option<String>,
}

/// Provider page holding the item at offset `skip`.
pub fn page_for_skip(skip: u32) -> u32 {
    skip / PAGE_SIZE + 1
}

#[derive(Clone)]
pub struct MetaService {
    provider: Arc<dyn MetadataProvider>,
}

impl MetaService {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// A `search` extra turns any known catalog into a title search.
    pub async fn catalog(
        &self,
        kind: MediaKind,
        catalog_id: &str,
        query: &CatalogQuery,
        language: Option<&str>,
    ) -> Result<Vec<MetaItem>, MetadataError> {
        let catalog = CatalogKind::from_id(catalog_id).ok_or(MetadataError::NotFound)?;
        let page = page_for_skip(query.skip);
        debug!(catalog = catalog.id(), kind = %kind, page, search = ?query.search, "fetching catalog");

        let results = match (&query.search, catalog) {
            (Some(text), _) => self.provider.search(kind, text, page, language).await?,
            (None, CatalogKind::Search) => return Ok(Vec::new()),
            (None, CatalogKind::Popular) => {
                self.provider.discover_popular(kind, page, language).await?
            }
            (None, CatalogKind::Trending) => self.provider.trending(kind, page, language).await?,
        };
        Ok(map_catalog(&results.results, kind))
    }

    /// Details and similar titles are fetched concurrently; both must succeed.
    pub async fn meta(
        &self,
        kind: MediaKind,
        raw_id: &str,
        language: Option<&str>,
    ) -> Result<MetaDetail, MetadataError> {
        let id = resolve(self.provider.as_ref(), raw_id, kind, language).await?;

        let (detail, similar) = tokio::join!(
            self.provider.details(id.kind, &id.provider_id, language),
            self.provider.similar(id.kind, &id.provider_id, language),
        );
        let (detail, similar) = (detail?, similar?);

        Ok(map_detail(&detail, &similar.results, id.kind))
    }

    /// Also accepts a bare provider id, taken to be of the route's kind.
    pub async fn similar(
        &self,
        kind: MediaKind,
        raw_id: &str,
        language: Option<&str>,
    ) -> Result<Vec<MetaItem>, MetadataError> {
        let id = if !raw_id.is_empty() && raw_id.bytes().all(|b| b.is_ascii_digit()) {
            ResolvedId {
                kind,
                provider_id: raw_id.to_string(),
            }
        } else {
            resolve(self.provider.as_ref(), raw_id, kind, language).await?
        };

        let similar = self
            .provider
            .similar(id.kind, &id.provider_id, language)
            .await?;
        Ok(map_catalog(&similar.results, id.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_maps_to_provider_page() {
        assert_eq!(page_for_skip(0), 1);
        assert_eq!(page_for_skip(19), 1);
        assert_eq!(page_for_skip(20), 2);
        assert_eq!(page_for_skip(100), 6);
    }

    #[test]
    fn catalog_ids_round_trip() {
        for c in CatalogKind::ALL {
            assert_eq!(CatalogKind::from_id(c.id()), Some(c));
        }
        assert_eq!(CatalogKind::from_id("tmdb.top"), None);
        assert!(CatalogKind::Search.requires_search());
        assert!(!CatalogKind::Popular.requires_search());
    }
}
