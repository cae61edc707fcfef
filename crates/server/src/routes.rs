use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tmdb_addon_core::error::ApiError;
use tmdb_addon_core::{MediaKind, MetaDetail, MetaItem};
use tmdb_addon_metadata::MetadataError;
use tmdb_addon_metadata::service::CatalogQuery;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::cache::CacheControl;
use crate::error::AppError;
use crate::manifest::build_manifest;
use crate::state::AppState;
use crate::user_config::UserConfig;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/manifest.json", get(manifest))
        .route("/{config}/manifest.json", get(configured_manifest))
        .merge(resource_router())
        .nest("/{config}", resource_router())
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Protocol resources. Mounted at the root and under a config segment.
fn resource_router() -> Router<AppState> {
    Router::new()
        .route("/catalog/{type}/{id}", get(catalog))
        .route("/catalog/{type}/{id}/{extra}", get(catalog))
        .route("/meta/{type}/{id}", get(meta))
        .route("/similar/{type}/{id}", get(similar))
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// JSON body with the endpoint's cache directives. CORS comes from the router layer.
fn respond<T: Serialize>(body: T, cache: &CacheControl) -> Response {
    let mut response = Json(body).into_response();
    if let Some(value) = cache.header_value() {
        if let Ok(value) = HeaderValue::from_str(&value) {
            response.headers_mut().insert(header::CACHE_CONTROL, value);
        }
    }
    response
}

/// Upstream and id errors degrade to an empty result; the caller never sees them.
fn degrade<T: Default>(result: Result<T, MetadataError>, resource: &str, id: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) if e.is_upstream() => {
            error!(resource, id, error = %e, "upstream request failed");
            T::default()
        }
        Err(e) => {
            warn!(resource, id, error = %e, "no result");
            T::default()
        }
    }
}

fn strip_json(segment: &str) -> Result<&str, AppError> {
    segment
        .strip_suffix(".json")
        .ok_or_else(|| ApiError::NotFound(format!("{segment} is not a .json resource")).into())
}

fn media_kind(raw: &str, resource: &str) -> Option<MediaKind> {
    let kind = MediaKind::parse(raw);
    if kind.is_none() {
        warn!(resource, kind = raw, "unsupported media type");
    }
    kind
}

// ---------------------------------------------------------------------------
// Health / root
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn root() -> Redirect {
    Redirect::temporary("/manifest.json")
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

async fn manifest(State(state): State<AppState>) -> Response {
    respond(build_manifest(&UserConfig::default()), &state.cache.manifest)
}

async fn configured_manifest(
    State(state): State<AppState>,
    Path(config): Path<String>,
) -> Response {
    respond(
        build_manifest(&UserConfig::parse(&config)),
        &state.cache.manifest,
    )
}

// ---------------------------------------------------------------------------
// Catalog / meta / similar
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ResourcePath {
    #[serde(default)]
    config: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    id: String,
    #[serde(default)]
    extra: Option<String>,
}

impl ResourcePath {
    fn user_config(&self) -> UserConfig {
        UserConfig::from_segment(self.config.as_deref())
    }
}

#[derive(Serialize)]
struct MetasResponse {
    metas: Vec<MetaItem>,
}

#[derive(Serialize)]
struct MetaResponse {
    meta: Option<MetaDetail>,
}

/// Catalog extra segment such as `skip=40&search=matrix`. Unknown keys are ignored.
fn parse_extra(extra: &str) -> CatalogQuery {
    let mut query = CatalogQuery::default();
    for (key, value) in extra.split('&').filter_map(|pair| pair.split_once('=')) {
        match key {
            "skip" => query.skip = value.parse().unwrap_or(0),
            "search" => {
                let value = value.trim();
                query.search = (!value.is_empty()).then(|| value.to_string());
            }
            _ => {}
        }
    }
    query
}

async fn catalog(
    State(state): State<AppState>,
    Path(params): Path<ResourcePath>,
) -> Result<Response, AppError> {
    let (catalog_id, query) = match params.extra.as_deref() {
        Some(extra) => (params.id.as_str(), parse_extra(strip_json(extra)?)),
        None => (strip_json(&params.id)?, CatalogQuery::default()),
    };
    let config = params.user_config();

    let metas = match media_kind(&params.kind, "catalog") {
        Some(kind) => degrade(
            state
                .service
                .catalog(kind, catalog_id, &query, config.language.as_deref())
                .await,
            "catalog",
            catalog_id,
        ),
        None => Vec::new(),
    };

    Ok(respond(MetasResponse { metas }, &state.cache.catalog))
}

async fn meta(
    State(state): State<AppState>,
    Path(params): Path<ResourcePath>,
) -> Result<Response, AppError> {
    let id = strip_json(&params.id)?;
    let config = params.user_config();

    let meta = match media_kind(&params.kind, "meta") {
        Some(kind) => degrade(
            state
                .service
                .meta(kind, id, config.language.as_deref())
                .await
                .map(Some),
            "meta",
            id,
        ),
        None => None,
    };

    Ok(respond(MetaResponse { meta }, &state.cache.meta))
}

#[derive(Deserialize)]
struct SimilarQuery {
    #[serde(rename = "catalogChoices")]
    catalog_choices: Option<String>,
}

async fn similar(
    State(state): State<AppState>,
    Path(params): Path<ResourcePath>,
    Query(query): Query<SimilarQuery>,
) -> Result<Response, AppError> {
    let id = strip_json(&params.id)?;
    let config = match (&params.config, &query.catalog_choices) {
        (Some(_), _) => params.user_config(),
        (None, choices) => UserConfig::from_segment(choices.as_deref()),
    };

    let metas = match media_kind(&params.kind, "similar") {
        Some(kind) => degrade(
            state
                .service
                .similar(kind, id, config.language.as_deref())
                .await,
            "similar",
            id,
        ),
        None => Vec::new(),
    };

    Ok(respond(MetasResponse { metas }, &state.cache.similar))
}
