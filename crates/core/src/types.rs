use serde::{Deserialize, Serialize};

/// Media kind as the addon protocol names it.
///
/// The provider calls series `tv`; that vocabulary never leaves the
/// metadata crate except inside fully qualified ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }

    /// Path segment used by the provider API and inside qualified ids.
    pub fn provider_kind(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "tv",
        }
    }

    /// Parse the protocol vocabulary (`movie` / `series`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "series" => Some(Self::Series),
            _ => None,
        }
    }

    /// Parse either vocabulary; `tv` and `series` both mean [`MediaKind::Series`].
    pub fn from_any(s: &str) -> Option<Self> {
        match s {
            "tv" => Some(Self::Series),
            other => Self::parse(other),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List entry returned by catalog and similar endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub name: String,
    pub poster: Option<String>,
    pub background: Option<String>,
    pub description: String,
    pub release_info: String,
}

/// Named sub-catalog embedded in a detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraCatalog {
    pub id: String,
    pub name: String,
    pub metas: Vec<MetaItem>,
}

/// Full detail record returned by the meta endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaDetail {
    #[serde(flatten)]
    pub item: MetaItem,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub trailer: Option<String>,
    pub extras: Vec<ExtraCatalog>,
}
