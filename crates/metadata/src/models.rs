//! Wire shapes of the TMDB v3 responses the addon consumes.
//!
//! Every field is defaulted so that sparse provider payloads decode; only
//! structurally wrong bodies are rejected.

use serde::Deserialize;

/// A movie or TV entry as it appears in list responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbItem {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
}

/// One page of a paginated list endpoint (discover, trending, similar).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbPage {
    pub page: u32,
    pub results: Vec<TmdbItem>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Detail response with `videos`, `credits` and `external_ids` appended.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbDetail {
    #[serde(flatten)]
    pub item: TmdbItem,
    pub genres: Vec<TmdbGenre>,
    pub credits: Option<TmdbCredits>,
    pub videos: Option<TmdbVideos>,
    pub external_ids: Option<TmdbExternalIds>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbGenre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbCredits {
    pub cast: Vec<TmdbCastMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbCastMember {
    pub name: Option<String>,
    pub character: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbVideos {
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbVideo {
    pub key: Option<String>,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbExternalIds {
    pub imdb_id: Option<String>,
}

/// Response of `/find/{external_id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbFindResults {
    pub movie_results: Vec<TmdbItem>,
    pub tv_results: Vec<TmdbItem>,
}
