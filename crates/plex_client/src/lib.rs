//! Access to the Plex Media Server REST API.

mod client;
pub mod models;

pub use client::{season_path, PlexClient};

use crate::models::LibrarySection;
use anyhow::Result;
use async_trait::async_trait;

/// The media server operations needed to turn a webhook into a rescan.
#[async_trait]
pub trait MediaServerClient: Send + Sync {
    /// Retrieve a fresh snapshot of the server's library sections.
    async fn list_libraries(&self) -> Result<Vec<LibrarySection>>;

    /// Ask the server to rescan `path` within the library section `library_id`. When `season`
    /// is given the scan is narrowed to that season's folder (see [season_path]).
    async fn rescan(&self, library_id: &str, path: &str, season: Option<u32>) -> Result<()>;
}
