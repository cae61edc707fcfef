//! Inbound id normalization.
//!
//! Accepted grammars:
//! - `tmdb:<kind>:<digits>` or `tmdb:<digits>`, `kind` being `movie`, `tv` or `series`
//! - `tt` followed by at least seven digits (IMDb), translated through the provider

use regex::Regex;
use std::sync::LazyLock;
use tmdb_addon_core::MediaKind;
use tracing::debug;

use crate::provider::MetadataProvider;
use crate::{ID_NAMESPACE, MetadataError};

static RE_QUALIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{ID_NAMESPACE}:(?:(movie|tv|series):)?(\d+)$")).unwrap()
});

static RE_IMDB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^tt\d{7,}$").unwrap());

/// Classification of a raw id taken from a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalId {
    /// Already a provider id. `kind` is `None` when the id omits it.
    Native {
        kind: Option<MediaKind>,
        provider_id: String,
    },
    /// IMDb id that needs a provider lookup.
    CrossRef { value: String },
    Invalid(String),
}

impl ExternalId {
    pub fn parse(raw: &str) -> Self {
        if let Some(caps) = RE_QUALIFIED.captures(raw) {
            return Self::Native {
                kind: caps.get(1).and_then(|m| MediaKind::from_any(m.as_str())),
                provider_id: caps[2].to_string(),
            };
        }
        if RE_IMDB.is_match(raw) {
            return Self::CrossRef {
                value: raw.to_string(),
            };
        }
        Self::Invalid(raw.to_string())
    }
}

/// Concrete provider coordinates of a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedId {
    pub kind: MediaKind,
    pub provider_id: String,
}

impl std::fmt::Display for ResolvedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{ID_NAMESPACE}:{}:{}",
            self.kind.provider_kind(),
            self.provider_id
        )
    }
}

/// Turn a raw path id into provider coordinates.
///
/// Qualified ids never touch the network. IMDb ids cost exactly one lookup;
/// a match of `hint` wins, otherwise movie results are taken before TV.
pub async fn resolve(
    provider: &dyn MetadataProvider,
    raw_id: &str,
    hint: MediaKind,
    language: Option<&str>,
) -> Result<ResolvedId, MetadataError> {
    match ExternalId::parse(raw_id) {
        ExternalId::Native { kind, provider_id } => Ok(ResolvedId {
            kind: kind.unwrap_or(hint),
            provider_id,
        }),
        ExternalId::CrossRef { value } => {
            let found = provider.find_by_imdb_id(&value, language).await?;

            let preferred = match hint {
                MediaKind::Movie => found.movie_results.first().map(|r| (MediaKind::Movie, r)),
                MediaKind::Series => found.tv_results.first().map(|r| (MediaKind::Series, r)),
            };
            let (kind, item) = preferred
                .or_else(|| found.movie_results.first().map(|r| (MediaKind::Movie, r)))
                .or_else(|| found.tv_results.first().map(|r| (MediaKind::Series, r)))
                .ok_or(MetadataError::NotFound)?;

            debug!(imdb_id = %value, tmdb_id = item.id, kind = %kind, "resolved cross-reference id");
            Ok(ResolvedId {
                kind,
                provider_id: item.id.to_string(),
            })
        }
        ExternalId::Invalid(raw) => Err(MetadataError::InvalidIdentifier(raw)),
    }
}
