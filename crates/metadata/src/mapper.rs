//! Reshape provider payloads into protocol records. No I/O happens here.

use tmdb_addon_core::{ExtraCatalog, MediaKind, MetaDetail, MetaItem};

use crate::ID_NAMESPACE;
use crate::models::{TmdbDetail, TmdbItem};

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const POSTER_SIZE: &str = "w500";
const BACKGROUND_SIZE: &str = "original";

const MAX_CAST: usize = 12;
const TRAILER_SITE: &str = "YouTube";
const TRAILER_TYPE: &str = "Trailer";
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

pub const SIMILAR_TITLES: &str = "Similar Titles";

/// `tmdb:<providerKind>:<providerId>`
pub fn qualified_id(kind: MediaKind, provider_id: impl std::fmt::Display) -> String {
    format!("{ID_NAMESPACE}:{}:{provider_id}", kind.provider_kind())
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

fn image_url(size: &str, path: &Option<String>) -> Option<String> {
    non_empty(path).map(|p| format!("{IMAGE_BASE}/{size}{p}"))
}

pub fn map_list_item(item: &TmdbItem, kind: MediaKind) -> MetaItem {
    let title = non_empty(&item.title);
    let name = non_empty(&item.name);
    let name = match kind {
        MediaKind::Movie => title.or(name),
        MediaKind::Series => name.or(title),
    };

    let release_info = non_empty(&item.release_date)
        .or_else(|| non_empty(&item.first_air_date))
        .and_then(|d| d.get(..4))
        .unwrap_or_default();

    MetaItem {
        id: qualified_id(kind, item.id),
        kind,
        name: name.unwrap_or_default().to_string(),
        poster: image_url(POSTER_SIZE, &item.poster_path),
        background: image_url(BACKGROUND_SIZE, &item.backdrop_path),
        description: item.overview.clone().unwrap_or_default(),
        release_info: release_info.to_string(),
    }
}

/// Provider order is kept; discover results arrive already ranked.
pub fn map_catalog(items: &[TmdbItem], kind: MediaKind) -> Vec<MetaItem> {
    items.iter().map(|item| map_list_item(item, kind)).collect()
}

pub fn map_detail(detail: &TmdbDetail, similar: &[TmdbItem], kind: MediaKind) -> MetaDetail {
    let item = map_list_item(&detail.item, kind);

    let cast = detail
        .credits
        .as_ref()
        .map(|c| {
            c.cast
                .iter()
                .filter_map(|person| person.name.clone())
                .take(MAX_CAST)
                .collect()
        })
        .unwrap_or_default();

    let trailer = detail.videos.as_ref().and_then(|v| {
        v.results
            .iter()
            .filter(|video| video.site == TRAILER_SITE && video.video_type == TRAILER_TYPE)
            .find_map(|video| video.key.as_ref())
            .map(|key| format!("{WATCH_URL}{key}"))
    });

    let similar_titles = ExtraCatalog {
        id: format!("similar-{}-{}", kind.provider_kind(), detail.item.id),
        name: SIMILAR_TITLES.to_string(),
        metas: map_catalog(similar, kind),
    };

    MetaDetail {
        item,
        genres: detail.genres.iter().map(|g| g.name.clone()).collect(),
        cast,
        trailer,
        extras: vec![similar_titles],
    }
}
