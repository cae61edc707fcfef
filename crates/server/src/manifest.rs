use serde::Serialize;
use tmdb_addon_core::MediaKind;
use tmdb_addon_metadata::ID_NAMESPACE;
use tmdb_addon_metadata::service::CatalogKind;

use crate::user_config::UserConfig;

pub const ADDON_ID: &str = "org.tmdb.addon";

/// Addon capability descriptor served at `manifest.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: String,
    pub resources: Vec<&'static str>,
    pub types: Vec<MediaKind>,
    pub id_prefixes: Vec<String>,
    pub catalogs: Vec<CatalogDescriptor>,
    pub behavior_hints: BehaviorHints,
}

#[derive(Debug, Serialize)]
pub struct CatalogDescriptor {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub id: &'static str,
    pub name: &'static str,
    pub extra: Vec<CatalogExtra>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExtra {
    pub name: &'static str,
    pub is_required: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorHints {
    pub configurable: bool,
    pub configuration_required: bool,
}

fn catalog_extras(catalog: CatalogKind) -> Vec<CatalogExtra> {
    let mut extras = Vec::new();
    if catalog.requires_search() {
        extras.push(CatalogExtra {
            name: "search",
            is_required: true,
        });
    }
    extras.push(CatalogExtra {
        name: "skip",
        is_required: false,
    });
    extras
}

pub fn build_manifest(config: &UserConfig) -> Manifest {
    let mut description =
        "Movie and series catalogs and metadata from The Movie Database (TMDB).".to_string();
    if let Some(language) = &config.language {
        description.push_str(&format!(" Metadata language: {language}."));
    }

    let catalogs = [MediaKind::Movie, MediaKind::Series]
        .into_iter()
        .flat_map(|kind| {
            CatalogKind::ALL.into_iter().map(move |catalog| CatalogDescriptor {
                kind,
                id: catalog.id(),
                name: catalog.label(),
                extra: catalog_extras(catalog),
            })
        })
        .collect();

    Manifest {
        id: ADDON_ID,
        version: env!("CARGO_PKG_VERSION"),
        name: "The Movie Database",
        description,
        resources: vec!["catalog", "meta"],
        types: vec![MediaKind::Movie, MediaKind::Series],
        id_prefixes: vec![format!("{ID_NAMESPACE}:"), "tt".to_string()],
        catalogs,
        behavior_hints: BehaviorHints {
            configurable: true,
            configuration_required: false,
        },
    }
}
