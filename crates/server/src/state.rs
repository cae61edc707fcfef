use tmdb_addon_metadata::service::MetaService;

use crate::cache::CachePolicy;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: MetaService,
    pub cache: CachePolicy,
}
