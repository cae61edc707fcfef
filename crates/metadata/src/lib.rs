pub mod mapper;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod service;
pub mod tmdb;

use thiserror::Error;

/// Namespace prefix of every id this addon produces (`tmdb:movie:603`).
pub const ID_NAMESPACE: &str = "tmdb";

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("not found")]
    NotFound,
    #[error("network error: {0}")]
    Network(String),
    #[error("provider error: {0}")]
    Provider(String),
}

impl MetadataError {
    /// Network failures, non-success statuses and undecodable bodies.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Provider(_))
    }
}
