#![allow(clippy::collapsible_if)]
pub mod cache;
pub mod config;
pub mod error;
pub mod manifest;
pub mod routes;
pub mod state;
pub mod user_config;
